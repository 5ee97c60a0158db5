use std::sync::Arc;

use crate::application::ports::link_store::LinkStore;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    link_store: Arc<dyn LinkStore>,
}

impl AppServices {
    pub fn new(link_store: Arc<dyn LinkStore>) -> Self {
        Self { link_store }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn link_store(&self) -> Arc<dyn LinkStore> {
        self.services.link_store.clone()
    }
}
