//! Registry of live sessions.
//!
//! The store owns the `SessionId → SessionHandle` map and spawns one
//! [`SessionWorker`] per game. Lookups only take the read lock; a session's own
//! operations are serialized by its worker, not by the registry lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};

use game_core::{Session, SessionEngine};

use crate::api::{Result, RuntimeError, SessionHandle, SessionId};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::scenario::{Scenario, ScenarioLibrary};
use crate::workers::{Command, SessionWorker};

/// Cloneable registry of live sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    config: Arc<RuntimeConfig>,
    scenarios: Arc<ScenarioLibrary>,
}

impl SessionStore {
    pub fn new(config: RuntimeConfig) -> Self {
        Self::with_scenarios(config, ScenarioLibrary::new())
    }

    pub fn with_scenarios(config: RuntimeConfig, scenarios: ScenarioLibrary) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
            scenarios: Arc::new(scenarios),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn scenarios(&self) -> &ScenarioLibrary {
        &self.scenarios
    }

    /// Create a session from the configured defaults.
    pub async fn create(&self) -> Result<SessionHandle> {
        let session = Session::new(&self.config.game)?;
        Ok(self.spawn(session).await)
    }

    /// Create a session and lay it out with the named library scenario.
    pub async fn create_with_scenario(&self, name: &str) -> Result<SessionHandle> {
        let scenario = self.scenarios.get(name)?;
        let session = Self::build_from_scenario(&self.config, scenario)?;
        Ok(self.spawn(session).await)
    }

    fn build_from_scenario(config: &RuntimeConfig, scenario: &Scenario) -> Result<Session> {
        let mut session = Session::new(&config.game)?;
        SessionEngine::new(&mut session).execute(&scenario.to_action().into())?;
        Ok(session)
    }

    async fn spawn(&self, session: Session) -> SessionHandle {
        let id = SessionId::generate();
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = SessionHandle::new(id.clone(), command_tx, event_bus.clone());
        let worker = SessionWorker::new(id.clone(), session, command_rx, event_bus);

        tokio::spawn(async move {
            worker.run().await;
        });

        self.sessions.write().await.insert(id.clone(), handle.clone());
        tracing::info!(session = %id, "game created");

        handle
    }

    pub async fn get(&self, id: &SessionId) -> Result<SessionHandle> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::SessionNotFound { id: id.clone() })
    }

    /// Drop a session from the registry. Its worker stops once the last
    /// outstanding handle is gone.
    pub async fn remove(&self, id: &SessionId) -> Result<()> {
        match self.sessions.write().await.remove(id) {
            Some(_) => {
                tracing::info!(session = %id, "game closed");
                Ok(())
            }
            None => Err(RuntimeError::SessionNotFound { id: id.clone() }),
        }
    }

    pub async fn ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
