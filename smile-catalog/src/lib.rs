pub mod product;
pub mod pricing;
pub mod gift_card;

pub use product::{CatalogError, Product, ProductPrice};
pub use pricing::{apply_gift_card, lowest_price_on, Cents, GiftCardOutcome};
pub use gift_card::GiftCard;
