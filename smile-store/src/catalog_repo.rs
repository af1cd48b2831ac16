use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use smile_catalog::{Cents, GiftCard, Product, ProductPrice};
use smile_core::repository::CatalogRepository;

pub struct StoreCatalogRepository {
    pool: PgPool,
}

impl StoreCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    code: String,
    name: String,
}

#[derive(sqlx::FromRow)]
struct PriceRow {
    id: Uuid,
    product_id: Uuid,
    price: i64,
    description: String,
    date_start: NaiveDate,
    date_end: NaiveDate,
}

#[derive(sqlx::FromRow)]
struct GiftCardRow {
    id: Uuid,
    code: String,
    amount: i64,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            code: row.code,
            name: row.name,
        }
    }
}

impl TryFrom<PriceRow> for ProductPrice {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: PriceRow) -> Result<Self, Self::Error> {
        Ok(ProductPrice {
            id: row.id,
            product_id: row.product_id,
            price: Cents(u64::try_from(row.price)?),
            description: row.description,
            date_start: row.date_start,
            date_end: row.date_end,
        })
    }
}

impl TryFrom<GiftCardRow> for GiftCard {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: GiftCardRow) -> Result<Self, Self::Error> {
        Ok(GiftCard {
            id: row.id,
            code: row.code,
            amount: Cents(u64::try_from(row.amount)?),
            date_start: row.date_start,
            date_end: row.date_end,
        })
    }
}

#[async_trait]
impl CatalogRepository for StoreCatalogRepository {
    async fn find_product(
        &self,
        code: &str,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, code, name FROM products WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn prices_covering(
        &self,
        product_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<ProductPrice>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, PriceRow>(
            r#"
            SELECT id, product_id, price, description, date_start, date_end
            FROM product_prices
            WHERE product_id = $1 AND date_start <= $2 AND date_end >= $2
            ORDER BY price
            "#,
        )
        .bind(product_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductPrice::try_from).collect()
    }

    async fn find_gift_card(
        &self,
        code: &str,
    ) -> Result<Option<GiftCard>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, GiftCardRow>(
            "SELECT id, code, amount, date_start, date_end FROM gift_cards WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(GiftCard::try_from).transpose()
    }
}
