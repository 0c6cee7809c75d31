//! # shop-catalog
//!
//! The storefront's fixed catalog and the order amount calculator.
//!
//! ## Catalog
//!
//! ```text
//! ┌────┬──────────────────────────────────────────────────────────────┬────────┐
//! │ id │ title                                                        │ amount │
//! ├────┼──────────────────────────────────────────────────────────────┼────────┤
//! │ 1  │ The Art of Doing Science and Engineering                     │  2300  │
//! │ 2  │ The Making of Prince of Persia: Journals 1985-1993           │  2500  │
//! │ 3  │ Working in Public: The Making and Maintenance of Open Source │  2800  │
//! └────┴──────────────────────────────────────────────────────────────┴────────┘
//! ```
//!
//! Amounts are minor currency units (cents).
//!
//! ## Order amounts
//!
//! The browser posts a map of price components. They are summed with
//! `rust_decimal` and the total is truncated toward zero:
//!
//! ```rust
//! use shop_catalog::calculate_order_amount;
//!
//! let prices = serde_json::json!({ "a": "10.00", "b": "12.99" });
//! let total = calculate_order_amount(prices.as_object().unwrap()).unwrap();
//! assert_eq!(total, 22);
//! ```

pub mod catalog;
pub mod error;
pub mod pricing;

pub use catalog::{CatalogItem, items, lookup};
pub use error::{Result, ValidationError};
pub use pricing::{calculate_order_amount, major_units};
