//! Shared test utilities: catalog builders and an in-memory source.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use catalog_view::catalog::{CatalogSource, FetchError, Item, PricingOption};

pub fn item(id: u64, title: &str, tier: PricingOption, price: Option<f64>) -> Item {
    Item {
        id,
        title: title.to_string(),
        creator: format!("creator-{id}"),
        image_path: format!("https://img.example/{id}.png"),
        pricing_option: tier,
        price,
    }
}

pub fn paid(id: u64, title: &str, price: f64) -> Item {
    item(id, title, PricingOption::Paid, Some(price))
}

pub fn free(id: u64, title: &str) -> Item {
    item(id, title, PricingOption::Free, None)
}

pub fn view_only(id: u64, title: &str) -> Item {
    item(id, title, PricingOption::ViewOnly, None)
}

/// `n` free items titled "Item 000", "Item 001", ...
pub fn numbered(n: u64) -> Vec<Item> {
    (0..n).map(|id| free(id, &format!("Item {id:03}"))).collect()
}

pub fn ids(items: &[Item]) -> Vec<u64> {
    items.iter().map(|i| i.id).collect()
}

/// Catalog source answering from memory.
pub enum StaticSource {
    Items(Vec<Item>),
    Fails(u16),
}

impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        match self {
            StaticSource::Items(items) => Ok(items.clone()),
            StaticSource::Fails(status) => Err(FetchError::Status { status: *status }),
        }
    }
}
