pub mod app_config;
pub mod catalog_repo;
pub mod database;

pub use catalog_repo::StoreCatalogRepository;
pub use database::DbClient;
