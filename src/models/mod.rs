mod portfolio;
mod price_series;

pub use portfolio::{AssetColumn, AssetRow, Chain, Portfolio, Wallet};
pub use price_series::{PricePoint, PriceSeries, generate_synthetic_series};
