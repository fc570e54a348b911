// crates/carousel-app/src/catalog.rs
// Catalog loader: one GET for the configured category

use carousel_types::{CatalogResponse, Product};

use crate::config::CarouselConfig;
use crate::error::LoadError;

/// Fetch the category listing. Non-2xx responses fail before the body is parsed.
pub async fn fetch_products(config: &CarouselConfig) -> Result<Vec<Product>, LoadError> {
    let url = config.catalog_url();
    log::info!("Fetching products from {}", url);

    let resp = gloo_net::http::Request::get(&url).send().await?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = resp.text().await?;
    parse_catalog(&body)
}

/// Parse a catalog response body into its product list
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, LoadError> {
    let catalog: CatalogResponse = serde_json::from_str(body)?;
    Ok(catalog.products)
}
