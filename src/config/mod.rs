//! Configuration module for the dashboard.

// Can all be private because we re-export what is needed.
mod animation;
mod debug;
mod demo;
mod reveal;
mod theme;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use animation::{ANIMATION, AnimationConfig};
pub use debug::DF;
pub use demo::{AssetSeed, DEMO, DemoConfig, SyntheticSeriesConfig, WalletSeed};
pub use plot::PLOT_CONFIG;
pub use reveal::{REVEAL, RevealConfig};
pub use theme::{THEME, ThemeConfig};
