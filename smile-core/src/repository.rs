use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;
use smile_catalog::{GiftCard, Product, ProductPrice};

/// Read-only access to products, price schedules and gift cards
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_product(
        &self,
        code: &str,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// Schedule entries of `product_id` whose inclusive interval contains `date`
    async fn prices_covering(
        &self,
        product_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<ProductPrice>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_gift_card(
        &self,
        code: &str,
    ) -> Result<Option<GiftCard>, Box<dyn std::error::Error + Send + Sync>>;
}
