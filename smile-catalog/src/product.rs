use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::Cents;

/// Core product structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    /// Internal facing reference, unique across the catalog
    pub code: String,
    /// Customer facing name
    pub name: String,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.code)
    }
}

/// One entry of a product's pricing schedule.
///
/// The validity interval is inclusive on both ends. Entries for the same
/// product may overlap; resolution picks the cheapest covering entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ProductPriceRecord")]
pub struct ProductPrice {
    pub id: Uuid,
    pub product_id: Uuid,
    pub price: Cents,
    /// Explanation for the pricing schedule
    pub description: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

/// Wire shape of [`ProductPrice`], checked on the way in.
#[derive(Deserialize)]
struct ProductPriceRecord {
    id: Uuid,
    product_id: Uuid,
    price: Cents,
    description: String,
    date_start: NaiveDate,
    date_end: NaiveDate,
}

impl TryFrom<ProductPriceRecord> for ProductPrice {
    type Error = CatalogError;

    fn try_from(record: ProductPriceRecord) -> Result<Self, Self::Error> {
        let mut price = ProductPrice::new(
            record.product_id,
            record.price,
            record.description,
            record.date_start,
            record.date_end,
        )?;
        price.id = record.id;
        Ok(price)
    }
}

impl ProductPrice {
    pub fn new(
        product_id: Uuid,
        price: Cents,
        description: impl Into<String>,
        date_start: NaiveDate,
        date_end: NaiveDate,
    ) -> Result<Self, CatalogError> {
        if date_start > date_end {
            return Err(CatalogError::InvalidInterval {
                start: date_start,
                end: date_end,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            price,
            description: description.into(),
            date_start,
            date_end,
        })
    }

    /// Whether `date` falls inside `[date_start, date_end]`
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.date_start <= date && date <= self.date_end
    }

    pub fn formatted_amount(&self) -> String {
        self.price.to_string()
    }
}

impl fmt::Display for ProductPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: costs {} from {} to {}",
            self.description, self.price, self.date_start, self.date_end
        )
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid validity interval: {start} is after {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },

    #[error("Product not found: {0}")]
    UnknownProduct(String),

    #[error("Duplicate code: {0}")]
    DuplicateCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_interval_is_inclusive() {
        let product = Product::new("big_widget", "Big Widget");
        let price = ProductPrice::new(
            product.id,
            Cents(80000),
            "Big Widget Black Friday Price in 2018",
            date(2018, 11, 23),
            date(2018, 11, 25),
        )
        .unwrap();

        assert!(price.covers(date(2018, 11, 23)));
        assert!(price.covers(date(2018, 11, 24)));
        assert!(price.covers(date(2018, 11, 25)));
        assert!(!price.covers(date(2018, 11, 22)));
        assert!(!price.covers(date(2018, 11, 26)));
    }

    #[test]
    fn test_single_day_interval_allowed() {
        let day = date(2019, 1, 1);
        let price = ProductPrice::new(Uuid::new_v4(), Cents(1), "flash", day, day);
        assert!(price.is_ok());
    }

    #[test]
    fn test_reversed_interval_rejected() {
        let (start, end) = (date(2019, 1, 2), date(2019, 1, 1));
        let err = ProductPrice::new(Uuid::new_v4(), Cents(100), "bad", start, end).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidInterval {
                start: date(2019, 1, 2),
                end: date(2019, 1, 1),
            }
        );
    }

    #[test]
    fn test_deserialize_checks_interval() {
        let id = Uuid::new_v4();
        let product_id = Uuid::new_v4();
        let doc = |start: &str, end: &str| {
            serde_json::json!({
                "id": id,
                "product_id": product_id,
                "price": 12500,
                "description": "Small Widget Price in 2019",
                "date_start": start,
                "date_end": end,
            })
        };

        let price: ProductPrice =
            serde_json::from_value(doc("2019-01-01", "2019-12-31")).unwrap();
        assert_eq!(price.id, id);
        assert_eq!(price.product_id, product_id);
        assert_eq!(price.price, Cents(12500));
        assert!(price.covers(date(2019, 6, 1)));

        let err = serde_json::from_value::<ProductPrice>(doc("2019-12-31", "2019-01-01"))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid validity interval"), "{err}");
    }

    #[test]
    fn test_display() {
        let product = Product::new("sm_widget", "Small Widget");
        assert_eq!(product.to_string(), "Small Widget - sm_widget");

        let price = ProductPrice::new(
            product.id,
            Cents(9900),
            "Small Widget Price in 2018",
            date(2018, 1, 1),
            date(2018, 12, 31),
        )
        .unwrap();
        assert_eq!(price.formatted_amount(), "$99.00");
        assert_eq!(
            price.to_string(),
            "Small Widget Price in 2018: costs $99.00 from 2018-01-01 to 2018-12-31"
        );
    }
}
