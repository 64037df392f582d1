//! Catalog items and the remote source they come from.

mod fetch;
mod item;

pub use fetch::{CatalogClient, CatalogSource, FetchError};
pub use item::{shape_records, Item, PricingOption, ShapeError};
