//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command, snapshot and event
//! channels, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use tabletop_core::{CatalogOracle, TabletopState, TimeMachine};

use crate::api::{Result, RuntimeError, Snapshot, TabletopHandle};
use crate::draw::AbilityCardDrawer;
use crate::events::EventBus;
use crate::oracle::CatalogValidator;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for ability-card draws. `None` seeds from the OS.
    pub draw_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            draw_seed: None,
        }
    }
}

/// Main runtime that owns one tabletop session
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`TabletopHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: TabletopHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> TabletopHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Commands queued before this call still run. Handle clones that outlive
    /// the runtime get [`RuntimeError::CommandChannelClosed`] afterwards.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.request_shutdown().await;
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<TabletopState>,
    catalog: Option<Arc<dyn CatalogOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            catalog: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial tabletop state (defaults to a fresh session)
    pub fn initial_state(mut self, state: TabletopState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set required catalog
    pub fn catalog(mut self, catalog: impl CatalogOracle + 'static) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Set required catalog from a shared instance
    pub fn shared_catalog(mut self, catalog: Arc<dyn CatalogOracle>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the runtime and spawn the session worker
    pub async fn build(self) -> Result<Runtime> {
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let machine = TimeMachine::new(self.state.unwrap_or_default());

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::capture(0, &machine));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = TabletopHandle::new(command_tx, event_bus.clone(), snapshot_rx);

        let worker = SessionWorker::new(
            machine,
            CatalogValidator::new(catalog),
            AbilityCardDrawer::new(self.config.draw_seed),
            command_rx,
            event_bus,
            snapshot_tx,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
