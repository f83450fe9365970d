use std::sync::LazyLock;

pub const ICON_ETHEREUM: &str = "Ξ";
pub const ICON_SOLANA: &str = "S";
pub const ICON_BITCOIN: &str = "B";

pub struct UiText {
    pub app_title: String,
    pub window_title: String,

    // --- Totals block ---
    pub label_total_value: String,
    pub label_assets: String,

    // --- Chain badges ---
    pub icon_ethereum: String,
    pub icon_solana: String,
    pub icon_bitcoin: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Terminal Crypto".to_string(),
    window_title: "Terminal Crypto - Portfolio".to_string(),

    label_total_value: "Total Asset Value:".to_string(),
    label_assets: "Assets".to_string(),

    icon_ethereum: ICON_ETHEREUM.to_string(),
    icon_solana: ICON_SOLANA.to_string(),
    icon_bitcoin: ICON_BITCOIN.to_string(),
});
