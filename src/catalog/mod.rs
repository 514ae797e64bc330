//! Item catalog: identifier to unit value lookup

pub mod prices;
pub mod tiers;

use crate::error::CatalogError;
use indexmap::IndexMap;
use std::sync::OnceLock;

pub use tiers::{CHEAP_ITEMS, EXPENSIVE_ITEMS, HIGH_VALUE_ITEMS, MEDIUM_ITEMS};

/// Read-only lookup of unit values by item identifier.
///
/// Identifiers are expected in normalized (lowercase) form; see [`normalize_identifier`].
pub trait ValueLookup {
    /// Whether the identifier is known
    fn has(&self, identifier: &str) -> bool;

    /// Unit value of the identifier, `None` exactly when [`ValueLookup::has`] is false
    fn value_of(&self, identifier: &str) -> Option<f64>;

    /// All known identifiers, in table order
    fn item_names(&self) -> Vec<&str>;
}

impl<T: ValueLookup + ?Sized> ValueLookup for &T {
    fn has(&self, identifier: &str) -> bool {
        (**self).has(identifier)
    }

    fn value_of(&self, identifier: &str) -> Option<f64> {
        (**self).value_of(identifier)
    }

    fn item_names(&self) -> Vec<&str> {
        (**self).item_names()
    }
}

/// Trim and lowercase an identifier
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

/// Immutable price table, insertion ordered
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: IndexMap<String, f64>,
}

static GLOBAL_TABLE: OnceLock<PriceTable> = OnceLock::new();

impl PriceTable {
    /// Build a table from `(identifier, value)` pairs.
    ///
    /// Names are normalized. Empty names, names with whitespace or commas (which
    /// no input clause could spell), duplicates (after normalization) and
    /// negative or non-finite values are rejected.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut map = IndexMap::new();

        for (name, value) in entries {
            let name = normalize_identifier(name);
            if name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if name.contains(|c: char| c.is_whitespace() || c == ',') {
                return Err(CatalogError::InvalidName(name));
            }
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidValue { name, value });
            }
            if map.contains_key(&name) {
                return Err(CatalogError::DuplicateItem(name));
            }
            map.insert(name, value);
        }

        Ok(Self { entries: map })
    }

    /// The built-in table, constructed on first use
    pub fn global() -> &'static PriceTable {
        GLOBAL_TABLE.get_or_init(|| {
            let mut entries = IndexMap::with_capacity(prices::PRICE_LIST.len());
            for &(name, value) in prices::PRICE_LIST {
                entries.insert(name.to_string(), value);
            }
            tracing::debug!(items = entries.len(), "Price table initialized");
            PriceTable { entries }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ValueLookup for PriceTable {
    fn has(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    fn value_of(&self, identifier: &str) -> Option<f64> {
        self.entries.get(identifier).copied()
    }

    fn item_names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_table_matches_price_list() {
        let table = PriceTable::global();
        assert_eq!(table.len(), prices::PRICE_LIST.len());

        for &(name, value) in prices::PRICE_LIST {
            assert!(table.has(name), "missing {}", name);
            assert_eq!(table.value_of(name), Some(value));
        }
    }

    #[test]
    fn test_price_list_is_normalized_and_non_negative() {
        for &(name, value) in prices::PRICE_LIST {
            assert_eq!(name, normalize_identifier(name));
            assert!(value >= 0.0 && value.is_finite(), "{} has value {}", name, value);
        }
        // Rebuilding through the validating constructor catches duplicates
        assert!(PriceTable::from_entries(prices::PRICE_LIST.iter().copied()).is_ok());
    }

    #[test]
    fn test_unknown_identifier() {
        let table = PriceTable::global();
        assert!(!table.has("foo"));
        assert_eq!(table.value_of("foo"), None);
    }

    #[test]
    fn test_lookup_expects_normalized_names() {
        let table = PriceTable::global();
        assert!(!table.has("Diamond"));
        assert!(table.has(&normalize_identifier("  Diamond ")));
    }

    #[test]
    fn test_from_entries_normalizes() {
        let table = PriceTable::from_entries([("Gold_Ingot", 12.0), ("stick", 0.0)]).unwrap();
        assert_eq!(table.value_of("gold_ingot"), Some(12.0));
        assert_eq!(table.value_of("stick"), Some(0.0));
        assert_eq!(table.item_names(), vec!["gold_ingot", "stick"]);
    }

    #[test]
    fn test_from_entries_rejects_bad_input() {
        assert_eq!(
            PriceTable::from_entries([("dirt", 1.0), ("DIRT", 2.0)]).unwrap_err(),
            CatalogError::DuplicateItem("dirt".to_string())
        );
        assert!(matches!(
            PriceTable::from_entries([("dirt", -1.0)]),
            Err(CatalogError::InvalidValue { .. })
        ));
        assert!(matches!(
            PriceTable::from_entries([("dirt", f64::NAN)]),
            Err(CatalogError::InvalidValue { .. })
        ));
        assert_eq!(
            PriceTable::from_entries([("  ", 1.0)]).unwrap_err(),
            CatalogError::EmptyName
        );
        assert_eq!(
            PriceTable::from_entries([("oak log", 10.0)]).unwrap_err(),
            CatalogError::InvalidName("oak log".to_string())
        );
        assert_eq!(
            PriceTable::from_entries([("a,b", 5.0)]).unwrap_err(),
            CatalogError::InvalidName("a,b".to_string())
        );
        assert_eq!(
            PriceTable::from_entries([("oak\tlog", 10.0)]).unwrap_err(),
            CatalogError::InvalidName("oak\tlog".to_string())
        );
    }
}
