//! Retail pricing API client and the pagination loop.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::models::{PriceListPage, PriceMap};
use crate::{Error, Result};

/// Base endpoint of the public retail prices API.
pub const PRICES_API_BASE: &str = "https://prices.azure.com/api/retail/prices";

/// Product whose prices are collected by default.
pub const DEFAULT_PRODUCT_NAME: &str = "Azure Cosmos DB Dedicated Gateway - General Purpose";

/// First page URL for all prices of one product.
pub fn prices_url_for_product(product_name: &str) -> String {
    let filter = format!("productName eq '{}'", product_name);
    format!("{}?$filter={}", PRICES_API_BASE, urlencoding::encode(&filter))
}

/// First page URL for [`DEFAULT_PRODUCT_NAME`].
pub fn default_prices_url() -> String {
    prices_url_for_product(DEFAULT_PRODUCT_NAME)
}

/// Something that can return one page of prices for a URL.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> impl std::future::Future<Output = Result<PriceListPage>>;
}

/// [`PageSource`] backed by the HTTP API.
pub struct PricingClient {
    http_client: reqwest::Client,
}

impl PricingClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

impl Default for PricingClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl PageSource for PricingClient {
    async fn fetch_page(&self, url: &str) -> Result<PriceListPage> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Follow continuation links from `start_url` until the API stops returning
/// one, merging every page into a single mapping.
pub async fn fetch_all<S: PageSource>(source: &S, start_url: &str) -> Result<PriceMap> {
    let mut prices = PriceMap::new();
    let mut next_url = Some(start_url.to_string());
    let mut currency_code: Option<String> = None;
    let mut pages = 0usize;

    while let Some(url) = next_url.take() {
        debug!(url = %url, "Fetching price page");
        let page = source.fetch_page(&url).await?;
        pages += 1;

        check_currency(&mut currency_code, &page)?;
        prices.merge(PriceMap::from_items(&page.items));
        info!(
            page = pages,
            items = page.items.len(),
            regions = prices.region_count(),
            entries = prices.len(),
            "Merged price page"
        );

        next_url = page.next_link().map(str::to_string);
    }

    info!(
        pages,
        entries = prices.len(),
        currency = currency_code.as_deref().unwrap_or("unknown"),
        "Finished fetching prices"
    );
    Ok(prices)
}

/// Every item must carry the same currency as the first one that had a code.
/// Items without a code are not checked.
fn check_currency(currency_code: &mut Option<String>, page: &PriceListPage) -> Result<()> {
    for item in &page.items {
        let Some(code) = item.currency_code.as_deref() else {
            continue;
        };
        match currency_code.as_deref() {
            None => *currency_code = Some(code.to_string()),
            Some(expected) if expected != code => {
                return Err(Error::CurrencyMismatch {
                    expected: expected.to_string(),
                    found: code.to_string(),
                    region: item.region.clone(),
                    sku: item.sku.clone(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Write the mapping as pretty-printed JSON, replacing any existing file.
pub fn write_price_map(path: &Path, prices: &PriceMap) -> Result<()> {
    let json = serde_json::to_string_pretty(prices)?;
    fs::write(path, json)?;
    info!(path = %path.display(), entries = prices.len(), "Wrote price map");
    Ok(())
}
