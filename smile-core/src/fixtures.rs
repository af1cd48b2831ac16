//! JSON fixture documents for seeding an [`InMemoryCatalog`].
//!
//! ```json
//! {
//!   "products":   [{ "code": "big_widget", "name": "Big Widget" }],
//!   "prices":     [{ "product_code": "big_widget", "price": 100000,
//!                    "description": "Big Widget Price in 2018",
//!                    "date_start": "2018-01-01", "date_end": "2018-12-31" }],
//!   "gift_cards": [{ "code": "10OFF", "amount": 1000, "date_start": "2018-07-01" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use smile_catalog::{CatalogError, Cents, GiftCard, Product};
use tracing::info;

use crate::memory::InMemoryCatalog;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFixtures {
    #[serde(default)]
    pub products: Vec<ProductFixture>,
    #[serde(default)]
    pub prices: Vec<PriceFixture>,
    #[serde(default)]
    pub gift_cards: Vec<GiftCardFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductFixture {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceFixture {
    pub product_code: String,
    pub price: Cents,
    #[serde(default)]
    pub description: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GiftCardFixture {
    pub code: String,
    pub amount: Cents,
    #[serde(default)]
    pub date_start: Option<NaiveDate>,
    #[serde(default)]
    pub date_end: Option<NaiveDate>,
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid fixture data: {0}")]
    Catalog(#[from] CatalogError),
}

impl InMemoryCatalog {
    pub fn from_fixtures(fixtures: CatalogFixtures) -> Result<Self, FixtureError> {
        let mut catalog = InMemoryCatalog::new();

        for product in fixtures.products {
            catalog.add_product(Product::new(product.code, product.name))?;
        }

        for price in fixtures.prices {
            catalog.add_price(
                &price.product_code,
                price.price,
                price.description,
                price.date_start,
                price.date_end,
            )?;
        }

        for card in fixtures.gift_cards {
            let gift_card = GiftCard::new(card.code, card.amount, card.date_start, card.date_end);
            catalog.add_gift_card(gift_card)?;
        }

        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        let fixtures: CatalogFixtures = serde_json::from_str(json)?;
        Self::from_fixtures(fixtures)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} products and {} gift cards from {}",
            catalog.product_count(),
            catalog.gift_card_count(),
            path.display()
        );
        Ok(catalog)
    }
}
