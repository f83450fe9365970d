//! Reveal engine: logical timers and the components that animate the dashboard.
//!
//! Everything here runs on the UI thread and is driven by an explicit `now` (time since
//! mount), so the same code works under egui's frame loop, the headless preview and tests.

mod row_reveal;
mod sequencer;
mod timeline;
mod trim;
mod typed_text;

pub use row_reveal::RowRevealCounter;
pub use sequencer::{RevealSchedule, RevealSequencer, RevealStage, ScheduleEntry, StageTransition};
pub use timeline::{TimerHandle, Timeline};
pub use trim::TrimAnimation;
pub use typed_text::TypedText;
