// ── Controller facade ──
//
// Builds one shared HTTP client from a `ClientConfig` and hands out
// repositories and pages for each entity type.

use std::sync::Arc;

use lifeline_api::RestClient;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::Entity;
use crate::page::CrudPage;
use crate::preview::PreviewProvider;
use crate::repository::{HttpRepository, Repository};

/// Entry point for consumers talking to a live backend.
///
/// Cheaply cloneable; every repository shares one connection pool.
#[derive(Debug, Clone)]
pub struct Controller {
    config: Arc<ClientConfig>,
    client: RestClient,
}

impl Controller {
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let client = RestClient::new(config.api_url.as_str(), &config.transport())?;
        debug!(api_url = %config.api_url, timeout = ?config.timeout, "controller ready");
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// HTTP entity client for `E`.
    pub fn repository<E: Entity>(&self) -> HttpRepository<E> {
        HttpRepository::new(self.client.clone())
    }

    /// A fresh page for `E` backed by the live API.
    pub fn page<E: Entity>(&self, preview: Arc<dyn PreviewProvider>) -> CrudPage<E> {
        let repo: Arc<dyn Repository<E>> = Arc::new(self.repository::<E>());
        CrudPage::new(repo, preview)
    }
}
