use std::time::Duration;

/// Shape of the default reveal schedule.
///
/// Stage layout: 1 = date, 2 = time, one stage per wallet, then
/// `stages_after_wallets` more (chart, asset table, settle stages).
pub struct RevealConfig {
    /// Delay before stage 1 fires.
    pub first_delay: Duration,
    /// Delay for the stages that follow the date line (time line, first wallet).
    pub clock_step: Duration,
    /// How many stages use `clock_step` after stage 1.
    pub clock_steps: u32,
    /// Delay for every remaining stage.
    pub section_step: Duration,
    pub stages_before_wallets: u32,
    pub stages_after_wallets: u32,
}

pub const REVEAL: RevealConfig = RevealConfig {
    first_delay: Duration::from_millis(100),
    clock_step: Duration::from_secs(1),
    clock_steps: 2,
    section_step: Duration::from_secs(2),
    stages_before_wallets: 2,
    stages_after_wallets: 4,
};
