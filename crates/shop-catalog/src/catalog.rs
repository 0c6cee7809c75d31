//! Catalog Lookup
//!
//! Hardcoded items; there is no database behind the storefront.

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// A purchasable item
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// Identifier used in `/checkout?item=`
    pub id: &'static str,

    /// Display title
    pub title: &'static str,

    /// Price in minor currency units
    pub amount: i64,
}

static CATALOG: [CatalogItem; 3] = [
    CatalogItem {
        id: "1",
        title: "The Art of Doing Science and Engineering",
        amount: 2300,
    },
    CatalogItem {
        id: "2",
        title: "The Making of Prince of Persia: Journals 1985-1993",
        amount: 2500,
    },
    CatalogItem {
        id: "3",
        title: "Working in Public: The Making and Maintenance of Open Source",
        amount: 2800,
    },
];

/// All items, in display order
pub fn items() -> &'static [CatalogItem] {
    &CATALOG
}

/// Look up an item by identifier.
///
/// Absent, empty and unknown identifiers all yield
/// [`ValidationError::NoItemSelected`].
pub fn lookup(id: Option<&str>) -> Result<&'static CatalogItem> {
    let id = id.ok_or(ValidationError::NoItemSelected)?;

    CATALOG.iter().find(|item| item.id == id).ok_or_else(|| {
        tracing::debug!(item = %id, "Unknown catalog item");
        ValidationError::NoItemSelected
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_items() {
        let expected = [
            ("1", "The Art of Doing Science and Engineering", 2300),
            ("2", "The Making of Prince of Persia: Journals 1985-1993", 2500),
            ("3", "Working in Public: The Making and Maintenance of Open Source", 2800),
        ];

        for (id, title, amount) in expected {
            let item = lookup(Some(id)).unwrap();
            assert_eq!(item.title, title);
            assert_eq!(item.amount, amount);
        }
    }

    #[test]
    fn test_unknown_items() {
        for id in [None, Some(""), Some("0"), Some("4"), Some(" 1"), Some("abc")] {
            assert_eq!(lookup(id), Err(ValidationError::NoItemSelected));
        }
        assert_eq!(ValidationError::NoItemSelected.to_string(), "No item selected");
    }

    #[test]
    fn test_lookup_is_stable() {
        let first = lookup(Some("2")).unwrap();
        let second = lookup(Some("2")).unwrap();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_items_order() {
        let ids: Vec<_> = items().iter().map(|item| item.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
