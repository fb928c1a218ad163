use std::sync::Arc;

use bank::{Catalog, get_bank};

use crate::{config::Config, error::AppError};

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, AppError> {
        let catalog = get_bank(&config.data_path)?;

        Ok(Self::from_catalog(config, catalog))
    }

    pub fn from_catalog(config: Config, catalog: Catalog) -> Arc<Self> {
        Arc::new(Self { config, catalog })
    }
}
