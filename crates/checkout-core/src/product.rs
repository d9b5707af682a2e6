//! # Product Pricing
//!
//! The price table maps a product name to a price in minor currency units.
//! Built-in defaults cover the Forever line; a table can also be loaded from
//! `config/products.toml`.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// Returns the lowercase ISO 4217 code, as Stripe expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::CAD => "cad",
            Currency::AUD => "aud",
        }
    }

    /// Parse a currency code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "usd" => Some(Currency::USD),
            "eur" => Some(Currency::EUR),
            "gbp" => Some(Currency::GBP),
            "cad" => Some(Currency::CAD),
            "aud" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Built-in catalogue, in cents
const DEFAULT_PRICES: [(&str, i64); 3] = [
    ("Forever Pants", 26000),
    ("Forever Shirt", 15500),
    ("Forever Shorts", 30000),
];

/// Immutable product → price mapping.
///
/// Every listed product has a positive price. Lookup through
/// [`PriceTable::amount_for`] is total: any id without an entry, the empty
/// string included, prices at `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    currency: Currency,
    prices: HashMap<String, i64>,
}

/// On-disk shape of the price table
#[derive(Debug, Deserialize)]
struct PriceTableFile {
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    products: Vec<PriceEntry>,
}

#[derive(Debug, Deserialize)]
struct PriceEntry {
    id: String,
    amount: i64,
}

impl PriceTable {
    /// Build a table from `(product id, amount)` pairs.
    ///
    /// Zero or negative amounts and duplicate ids are rejected.
    pub fn new<I, K>(currency: Currency, entries: I) -> CheckoutResult<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut prices = HashMap::new();
        for (id, amount) in entries {
            let id = id.into();
            if amount <= 0 {
                return Err(CheckoutError::Configuration(format!(
                    "price for {:?} must be positive, got {}",
                    id, amount
                )));
            }
            if prices.insert(id.clone(), amount).is_some() {
                return Err(CheckoutError::Configuration(format!(
                    "duplicate price table entry: {:?}",
                    id
                )));
            }
        }
        Ok(Self { currency, prices })
    }

    /// Load a table from a TOML string
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        let file: PriceTableFile = toml::from_str(toml_str)
            .map_err(|e| CheckoutError::Configuration(format!("invalid price table: {}", e)))?;
        Self::new(
            file.currency,
            file.products.into_iter().map(|p| (p.id, p.amount)),
        )
    }

    /// Price in minor units, or `0` when the product is not listed
    pub fn amount_for(&self, product_id: &str) -> i64 {
        self.get(product_id).unwrap_or(0)
    }

    /// Price in minor units, if the product is listed
    pub fn get(&self, product_id: &str) -> Option<i64> {
        self.prices.get(product_id).copied()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Product ids in sorted order
    pub fn product_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.prices.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            prices: DEFAULT_PRICES
                .iter()
                .map(|(id, amount)| (id.to_string(), *amount))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let table = PriceTable::default();
        assert_eq!(table.amount_for("Forever Pants"), 26000);
        assert_eq!(table.amount_for("Forever Shirt"), 15500);
        assert_eq!(table.amount_for("Forever Shorts"), 30000);
        assert_eq!(table.currency(), Currency::USD);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_unknown_products_price_at_zero() {
        let table = PriceTable::default();
        assert_eq!(table.amount_for(""), 0);
        assert_eq!(table.amount_for("Forever Socks"), 0);
        // lookup is exact, not case-folded
        assert_eq!(table.amount_for("forever pants"), 0);
        assert_eq!(table.get("Forever Socks"), None);
    }

    #[test]
    fn test_from_toml() {
        let table = PriceTable::from_toml(
            r#"
            currency = "eur"

            [[products]]
            id = "Forever Hat"
            amount = 4200

            [[products]]
            id = "Forever Scarf"
            amount = 1800
            "#,
        )
        .unwrap();

        assert_eq!(table.currency(), Currency::EUR);
        assert_eq!(table.get("Forever Hat"), Some(4200));
        assert_eq!(table.get("Forever Scarf"), Some(1800));
        assert_eq!(table.product_ids(), vec!["Forever Hat", "Forever Scarf"]);
    }

    #[test]
    fn test_from_toml_defaults_to_usd() {
        let table = PriceTable::from_toml("").unwrap();
        assert_eq!(table.currency(), Currency::USD);
        assert!(table.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_and_duplicate_entries() {
        let negative = PriceTable::new(Currency::USD, [("Forever Pants", -1)]);
        assert!(matches!(negative, Err(CheckoutError::Configuration(_))));

        // a zero price would be indistinguishable from an unlisted product
        let free = PriceTable::from_toml(
            r#"
            [[products]]
            id = "Forever Scarf"
            amount = 0
            "#,
        );
        assert!(matches!(free, Err(CheckoutError::Configuration(_))));

        let duplicate = PriceTable::from_toml(
            r#"
            [[products]]
            id = "Forever Pants"
            amount = 100

            [[products]]
            id = "Forever Pants"
            amount = 200
            "#,
        );
        assert!(matches!(duplicate, Err(CheckoutError::Configuration(_))));
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::USD.as_str(), "usd");
        assert_eq!(Currency::USD.to_string(), "USD");
        assert_eq!(Currency::from_code("GBP"), Some(Currency::GBP));
        assert_eq!(Currency::from_code("xyz"), None);
    }
}
