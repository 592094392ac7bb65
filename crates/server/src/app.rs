use std::sync::Arc;

use persistence::{Adapter, PersistenceError, PersistenceResult, TableSchema, REGISTRY};
use sqlx::AnyPool;
use tracing::info;

use crate::config::{CasdoorConfig, Config};

/// Everything request handlers need from process startup.
///
/// Built once by [`AppContext::initialize`] and passed by value (it is a pair
/// of `Arc`s) to whatever needs storage. Independent contexts never share an
/// engine, so tests can build as many as they like.
#[derive(Clone)]
pub struct AppContext {
    adapter: Arc<Adapter>,
    casdoor: Arc<CasdoorConfig>,
}

impl AppContext {
    /// Opens the database and synchronizes every forum table.
    pub async fn initialize(config: &Config) -> PersistenceResult<Self> {
        Self::with_registry(config, REGISTRY).await
    }

    /// Like [`AppContext::initialize`] with an explicit schema list.
    ///
    /// The configuration is validated first, so a context never starts with
    /// blank Casdoor identifiers.
    pub async fn with_registry(
        config: &Config,
        registry: &[TableSchema],
    ) -> PersistenceResult<Self> {
        config
            .validate()
            .map_err(|e| PersistenceError::Config(e.to_string()))?;

        let adapter = Adapter::open(config.database.clone(), registry).await?;

        info!(
            organization = %config.casdoor.organization,
            application = %config.casdoor.application,
            "Application context ready"
        );

        Ok(Self {
            adapter: Arc::new(adapter),
            casdoor: Arc::new(config.casdoor.clone()),
        })
    }

    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Shortcut for `adapter().engine()`.
    pub fn engine(&self) -> PersistenceResult<&AnyPool> {
        self.adapter.engine()
    }

    pub fn casdoor_organization(&self) -> &str {
        &self.casdoor.organization
    }

    pub fn casdoor_application(&self) -> &str {
        &self.casdoor.application
    }

    /// Closes the engine. Safe to call from several clones or more than once.
    pub async fn shutdown(&self) -> PersistenceResult<()> {
        info!("Shutting down application context");
        self.adapter.close().await
    }
}
