use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use smile_catalog::{CatalogError, Cents, GiftCard, Product, ProductPrice};
use uuid::Uuid;

use crate::repository::CatalogRepository;

/// HashMap-backed catalog for fixtures and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, Product>,
    prices: HashMap<Uuid, Vec<ProductPrice>>,
    gift_cards: HashMap<String, GiftCard>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.products.contains_key(&product.code) {
            return Err(CatalogError::DuplicateCode(product.code));
        }

        self.prices.entry(product.id).or_default();
        self.products.insert(product.code.clone(), product);
        Ok(())
    }

    /// Add a schedule entry to the product registered under `product_code`
    pub fn add_price(
        &mut self,
        product_code: &str,
        price: Cents,
        description: impl Into<String>,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<(), CatalogError> {
        let product_id = self
            .products
            .get(product_code)
            .map(|product| product.id)
            .ok_or_else(|| CatalogError::UnknownProduct(product_code.to_string()))?;

        let entry = ProductPrice::new(product_id, price, description, date_start, date_end)?;
        self.prices.entry(product_id).or_default().push(entry);
        Ok(())
    }

    pub fn add_gift_card(&mut self, card: GiftCard) -> Result<(), CatalogError> {
        if self.gift_cards.contains_key(&card.code) {
            return Err(CatalogError::DuplicateCode(card.code));
        }

        self.gift_cards.insert(card.code.clone(), card);
        Ok(())
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn gift_card_count(&self) -> usize {
        self.gift_cards.len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_product(
        &self,
        code: &str,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.products.get(code).cloned())
    }

    async fn prices_covering(
        &self,
        product_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<ProductPrice>, Box<dyn std::error::Error + Send + Sync>> {
        let entries: Vec<ProductPrice> = self
            .prices
            .get(&product_id)
            .map(|entries| entries.iter().filter(|e| e.covers(date)).cloned().collect())
            .unwrap_or_default();

        Ok(entries)
    }

    async fn find_gift_card(
        &self,
        code: &str,
    ) -> Result<Option<GiftCard>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.gift_cards.get(code).cloned())
    }
}
