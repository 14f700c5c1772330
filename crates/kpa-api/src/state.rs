use std::sync::Arc;

use anyhow::Context;
use kpa_catalog::Catalog;

use crate::{ApiConfig, config::Environment};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    pub environment: Environment,
    pub allowed_origins: Vec<String>,
}

impl ApiState {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin().context("built-in catalog is invalid")?,
        };

        Ok(Self::with_catalog(catalog, config.env, config.allowed_origins))
    }

    pub fn with_catalog(
        catalog: Catalog,
        environment: Environment,
        allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            environment,
            allowed_origins,
        }
    }
}
