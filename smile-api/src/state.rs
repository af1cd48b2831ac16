use std::sync::Arc;

use anyhow::Context;
use smile_core::{CatalogRepository, InMemoryCatalog, PriceResolver};
use smile_store::app_config::{CatalogSource, Config};
use smile_store::{DbClient, StoreCatalogRepository};

#[derive(Clone)]
pub struct AppState {
    pub resolver: PriceResolver,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            resolver: PriceResolver::new(catalog),
        }
    }

    /// Build the catalog selected by `catalog.source`
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog: Arc<dyn CatalogRepository> = match config.catalog.source {
            CatalogSource::Fixtures => {
                let path = config
                    .catalog
                    .fixtures_path
                    .as_deref()
                    .context("catalog.fixtures_path is not set")?;

                let catalog = InMemoryCatalog::from_json_file(path)
                    .with_context(|| format!("Failed to load catalog fixtures from {}", path))?;
                Arc::new(catalog)
            }
            CatalogSource::Postgres => {
                let database = config
                    .database
                    .as_ref()
                    .context("[database] section is not set")?;

                let db = DbClient::new(database)
                    .await
                    .context("Failed to connect to Postgres")?;

                if database.run_migrations {
                    db.migrate().await.context("Failed to run migrations")?;
                }

                Arc::new(StoreCatalogRepository::new(db.pool.clone()))
            }
        };

        Ok(Self::new(catalog))
    }
}
