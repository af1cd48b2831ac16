use std::sync::Arc;

use chrono::NaiveDate;
use smile_catalog::{apply_gift_card, lowest_price_on, Cents, GiftCardOutcome};
use tracing::debug;

use crate::date::parse_price_date;
use crate::repository::CatalogRepository;

/// Inputs to a price lookup, exactly as received from the caller
#[derive(Debug, Clone, Default)]
pub struct PriceRequest {
    pub product_code: Option<String>,
    pub date: Option<String>,
    pub gift_card_code: Option<String>,
}

impl PriceRequest {
    pub fn new(product_code: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            product_code: Some(product_code.into()),
            date: Some(date.into()),
            gift_card_code: None,
        }
    }

    pub fn with_gift_card(mut self, code: impl Into<String>) -> Self {
        self.gift_card_code = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftCardStatus {
    Applied,
    NotApplicable,
}

impl GiftCardStatus {
    pub fn message(&self) -> &'static str {
        match self {
            GiftCardStatus::Applied => "Gift card applied at that date",
            GiftCardStatus::NotApplicable => "Gift card not applicable at that date",
        }
    }
}

impl From<GiftCardOutcome> for GiftCardStatus {
    fn from(outcome: GiftCardOutcome) -> Self {
        match outcome {
            GiftCardOutcome::Applied { .. } => GiftCardStatus::Applied,
            GiftCardOutcome::NotApplicable { .. } => GiftCardStatus::NotApplicable,
        }
    }
}

/// Resolved price for a product on a date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Display name of the product
    pub product: String,
    pub price: Cents,
    /// Present only when a gift card code was supplied
    pub gift_card: Option<GiftCardStatus>,
}

impl PriceQuote {
    pub fn message(&self) -> Option<&'static str> {
        self.gift_card.map(|status| status.message())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotFound {
    #[error("Product not found: {0}")]
    Product(String),

    #[error("Price not set for {product} on {date}")]
    Price { product: String, date: NaiveDate },

    #[error("Gift card not found: {0}")]
    GiftCard(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("Missing \"productCode\" or \"date\" query parameters")]
    MissingParameter,

    #[error("Date must be formatted e.g. Jun 01 2004")]
    InvalidDate(String),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("Catalog lookup failed: {0}")]
    Catalog(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Resolves the price of a product on a date against an injected catalog
#[derive(Clone)]
pub struct PriceResolver {
    catalog: Arc<dyn CatalogRepository>,
}

impl PriceResolver {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn resolve(&self, request: &PriceRequest) -> Result<PriceQuote, PriceError> {
        let (product_code, date_input) = match (
            non_empty(request.product_code.as_deref()),
            non_empty(request.date.as_deref()),
        ) {
            (Some(product_code), Some(date_input)) => (product_code, date_input),
            _ => return Err(PriceError::MissingParameter),
        };

        let date = parse_price_date(date_input)?;

        let product = self
            .catalog
            .find_product(product_code)
            .await
            .map_err(PriceError::Catalog)?
            .ok_or_else(|| NotFound::Product(product_code.to_string()))?;

        let entries = self
            .catalog
            .prices_covering(product.id, date)
            .await
            .map_err(PriceError::Catalog)?;

        let lowest = lowest_price_on(&entries, date).ok_or_else(|| NotFound::Price {
            product: product.code.clone(),
            date,
        })?;

        debug!(
            "Selected {} for {} on {} out of {} covering entries",
            lowest.price, product.code, date, entries.len()
        );

        let mut quote = PriceQuote {
            product: product.name,
            price: lowest.price,
            gift_card: None,
        };

        if let Some(code) = non_empty(request.gift_card_code.as_deref()) {
            let card = self
                .catalog
                .find_gift_card(code)
                .await
                .map_err(PriceError::Catalog)?
                .ok_or_else(|| NotFound::GiftCard(code.to_string()))?;

            let outcome = apply_gift_card(quote.price, &card, date);
            debug!("Gift card {} on {}: {:?}", card.code, date, outcome);

            quote.price = outcome.price();
            quote.gift_card = Some(outcome.into());
        }

        Ok(quote)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
