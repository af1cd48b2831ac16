use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smile_core::{PriceQuote, PriceRequest};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "productCode")]
    pub product_code: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "giftCardCode")]
    pub gift_card_code: Option<String>,
}

impl From<PriceQuery> for PriceRequest {
    fn from(query: PriceQuery) -> Self {
        PriceRequest {
            product_code: query.product_code,
            date: query.date,
            gift_card_code: query.gift_card_code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub product: String,
    /// Formatted as `$X.XX`
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<PriceQuote> for PriceResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            price: quote.price.to_string(),
            message: quote.message().map(str::to_string),
            product: quote.product,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/get-price", get(get_price))
}

/// GET /api/get-price?productCode=..&date=..&giftCardCode=..
pub async fn get_price(
    State(state): State<AppState>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<PriceResponse>, AppError> {
    let Query(query) = query?;
    info!("GET /api/get-price - query: {:?}", query);

    let request: PriceRequest = query.into();
    let quote = state.resolver.resolve(&request).await?;

    Ok(Json(quote.into()))
}
