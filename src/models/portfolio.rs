use strum_macros::{Display, EnumIter};

use crate::config::{DEMO, DemoConfig};
use crate::utils::{format_currency, format_integer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Chain {
    #[strum(to_string = "Ethereum")]
    Ethereum,
    #[strum(to_string = "Solana")]
    Solana,
    #[strum(to_string = "Bitcoin")]
    Bitcoin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallet {
    pub chain: Chain,
    pub address: String,
}

/// One line of the asset table.
///
/// `total_value` is an independent stored figure; the sample data does not satisfy
/// `quantity * unit_price == total_value` and nothing here assumes it does.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRow {
    pub symbol: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub total_value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum AssetColumn {
    #[strum(to_string = "Asset")]
    Asset,
    #[strum(to_string = "Quantity")]
    Quantity,
    #[strum(to_string = "Price")]
    Price,
    #[strum(to_string = "Value")]
    Value,
}

impl AssetColumn {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Asset)
    }

    /// Formatted cell text for `row`.
    pub fn cell(&self, row: &AssetRow) -> String {
        match self {
            Self::Asset => row.symbol.clone(),
            Self::Quantity => format_integer(row.quantity),
            Self::Price => format_currency(row.unit_price, 2, 5),
            Self::Value => format_currency(row.total_value, 2, 5),
        }
    }
}

/// Everything static the dashboard shows: wallets, holdings and the headline total.
#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub wallets: Vec<Wallet>,
    pub assets: Vec<AssetRow>,
    pub total_value: f64,
}

impl Portfolio {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            wallets: config
                .wallets
                .iter()
                .map(|w| Wallet {
                    chain: w.chain,
                    address: w.address.to_string(),
                })
                .collect(),
            assets: config
                .assets
                .iter()
                .map(|a| AssetRow {
                    symbol: a.symbol.to_string(),
                    quantity: a.quantity,
                    unit_price: a.unit_price,
                    total_value: a.total_value,
                })
                .collect(),
            total_value: config.total_asset_value,
        }
    }

    pub fn demo() -> Self {
        Self::from_config(&DEMO)
    }

    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn demo_portfolio_matches_sample_data() {
        let p = Portfolio::demo();
        assert_eq!(p.wallet_count(), 2);
        assert_eq!(p.asset_count(), 7);
        assert_eq!(p.total_value, 1_220_000.0);
        assert_eq!(p.wallets[0].chain, Chain::Ethereum);
        assert!(p.assets.iter().all(|a| a.unit_price >= 0.0));
    }

    #[test]
    fn total_value_is_stored_not_derived() {
        let p = Portfolio::demo();
        let eth = &p.assets[0];
        assert_eq!(eth.symbol, "ETH");
        assert_eq!(eth.total_value, 420_000.0);
        assert_ne!(eth.quantity as f64 * eth.unit_price, eth.total_value);
    }

    #[test]
    fn columns_format_cells() {
        let p = Portfolio::demo();
        let pepe = &p.assets[2];
        let cells: Vec<String> = AssetColumn::iter().map(|c| c.cell(pepe)).collect();
        assert_eq!(cells, vec!["PEPE", "8,140,000,000", "$0.00003", "$200,000.00"]);

        let headers: Vec<String> = AssetColumn::iter().map(|c| c.to_string()).collect();
        assert_eq!(headers, vec!["Asset", "Quantity", "Price", "Value"]);
        assert!(!AssetColumn::Asset.is_numeric());
        assert!(AssetColumn::Value.is_numeric());
    }
}
