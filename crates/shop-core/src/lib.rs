//! # shop-core
//!
//! Domain types shared by the bookshop server and payments crates: the
//! built-in item catalog and minor-unit amount formatting.

mod catalog;
mod money;

pub use catalog::{Catalog, CatalogItem};
pub use money::format_minor_units;
