//! Hardcoded sample data shown on the dashboard.

use std::time::Duration;

use crate::models::Chain;

pub struct WalletSeed {
    pub chain: Chain,
    pub address: &'static str,
}

/// Static asset row. `total_value` is stored as-is, never derived from quantity * price.
pub struct AssetSeed {
    pub symbol: &'static str,
    pub quantity: u64,
    pub unit_price: f64,
    pub total_value: f64,
}

/// Parameters for the generated price history.
pub struct SyntheticSeriesConfig {
    pub point_count: usize,
    pub base_price: f64,
    pub noise_min: f64,
    pub noise_max: f64,
    pub interval: Duration,
}

pub struct DemoConfig {
    pub wallets: &'static [WalletSeed],
    pub assets: &'static [AssetSeed],
    pub total_asset_value: f64,
    pub synthetic: SyntheticSeriesConfig,
}

pub const DEMO: DemoConfig = DemoConfig {
    wallets: &[
        WalletSeed {
            chain: Chain::Ethereum,
            address: "0xa34Fb1A718E7985B902b696122Ab6FC8C0794",
        },
        WalletSeed {
            chain: Chain::Solana,
            address: "Ero5V46KNpei17K18hxh9Cs5N8De4f1vHB6NTEi",
        },
    ],
    assets: &[
        AssetSeed {
            symbol: "ETH",
            quantity: 106,
            unit_price: 3_930.00,
            total_value: 420_000.00,
        },
        AssetSeed {
            symbol: "SOL",
            quantity: 1_115,
            unit_price: 225.00,
            total_value: 250_000.00,
        },
        AssetSeed {
            symbol: "PEPE",
            quantity: 8_140_000_000,
            unit_price: 0.000025,
            total_value: 200_000.00,
        },
        AssetSeed {
            symbol: "TURBO",
            quantity: 12_800_000,
            unit_price: 0.012,
            total_value: 150_000.00,
        },
        AssetSeed {
            symbol: "GOAT",
            quantity: 124_000,
            unit_price: 0.80,
            total_value: 100_000.00,
        },
        AssetSeed {
            symbol: "AI16Z",
            quantity: 100_200,
            unit_price: 0.80,
            total_value: 80_000.00,
        },
        AssetSeed {
            symbol: "DEGEN",
            quantity: 1_300_000,
            unit_price: 0.016,
            total_value: 20_000.00,
        },
    ],
    total_asset_value: 1_220_000.00,
    synthetic: SyntheticSeriesConfig {
        point_count: 24,
        base_price: 1_000.0,
        noise_min: -5.0,
        noise_max: 15.0,
        interval: Duration::from_secs(60 * 60), // hourly
    },
};
