pub mod date;
pub mod fixtures;
pub mod memory;
pub mod repository;
pub mod resolver;

pub use date::parse_price_date;
pub use fixtures::{CatalogFixtures, FixtureError};
pub use memory::InMemoryCatalog;
pub use repository::CatalogRepository;
pub use resolver::{GiftCardStatus, NotFound, PriceError, PriceQuote, PriceRequest, PriceResolver};
