//! Shared data models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One retail price record from the pricing API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceItem {
    #[serde(rename = "armRegionName")]
    pub region: String,
    #[serde(rename = "skuName")]
    pub sku: String,
    #[serde(rename = "retailPrice")]
    pub retail_price: f64,
    #[serde(rename = "currencyCode", default)]
    pub currency_code: Option<String>,
}

/// One page of the pricing API response.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceListPage {
    #[serde(rename = "Items")]
    pub items: Vec<PriceItem>,
    #[serde(rename = "NextPageLink", default)]
    pub next_page_link: Option<String>,
}

impl PriceListPage {
    /// Continuation link, if the API returned a non-empty one.
    pub fn next_link(&self) -> Option<&str> {
        self.next_page_link
            .as_deref()
            .filter(|link| !link.is_empty())
    }
}

/// Region -> SKU -> retail price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceMap(BTreeMap<String, BTreeMap<String, f64>>);

impl PriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from one page of items. A repeated (region, SKU)
    /// keeps the last price seen.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a PriceItem>,
    {
        let mut map = Self::new();
        for item in items {
            map.insert(&item.region, &item.sku, item.retail_price);
        }
        map
    }

    pub fn insert(&mut self, region: &str, sku: &str, price: f64) -> Option<f64> {
        self.0
            .entry(region.to_string())
            .or_default()
            .insert(sku.to_string(), price)
    }

    /// Merge `other` into `self`; entries of `other` win for identical
    /// (region, SKU) pairs.
    pub fn merge(&mut self, other: PriceMap) {
        for (region, skus) in other.0 {
            self.0.entry(region).or_default().extend(skus);
        }
    }

    pub fn get(&self, region: &str, sku: &str) -> Option<f64> {
        self.0.get(region).and_then(|skus| skus.get(sku)).copied()
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn region_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of (region, SKU) entries.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
