//! Item Catalog
//!
//! A static mapping from item id to title and price, compiled into the
//! process and immutable for its lifetime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A purchasable item. The amount is in minor units (cents).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog id (the `item` query parameter on the checkout page)
    pub id: String,

    /// Display title
    pub title: String,

    /// Price in minor units
    pub amount: i64,
}

/// Read-only item catalog keyed by id.
///
/// Built once at startup and shared behind an `Arc`; there is no mutation
/// path after construction.
pub struct Catalog {
    items: HashMap<String, CatalogItem>,
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn builtin() -> Self {
        let items = [
            CatalogItem {
                id: "1".into(),
                title: "The Art of Doing Science and Engineering".into(),
                amount: 2300,
            },
            CatalogItem {
                id: "2".into(),
                title: "The Making of Prince of Persia: Journals 1985-1993".into(),
                amount: 2500,
            },
            CatalogItem {
                id: "3".into(),
                title: "Working in Public: The Making and Maintenance of Open Source".into(),
                amount: 2800,
            },
        ];

        Self {
            items: items.into_iter().map(|i| (i.id.clone(), i)).collect(),
        }
    }

    /// Look up an item by id. The only failure mode is "not found".
    pub fn lookup(&self, id: &str) -> Option<&CatalogItem> {
        self.items.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_items() {
        let catalog = Catalog::builtin();

        let item = catalog.lookup("1").expect("item 1 exists");
        assert_eq!(item.title, "The Art of Doing Science and Engineering");
        assert_eq!(item.amount, 2300);

        assert_eq!(catalog.lookup("2").unwrap().amount, 2500);
        assert_eq!(catalog.lookup("3").unwrap().amount, 2800);
    }

    #[test]
    fn test_lookup_unknown_item() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("99").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_lookup_is_pure() {
        let catalog = Catalog::builtin();
        let first = catalog.lookup("1").cloned();
        let second = catalog.lookup("1").cloned();
        assert_eq!(first, second);
    }
}
