//! Agent manager owning every live agent by id.
//!
//! The `AgentManager` is responsible for:
//! - Creating agents through the [`AgentFactory`] with unique ids
//! - Routing messages to agents by id
//! - Releasing agents on destroy and shutdown

use crate::agents::base::{Agent, AgentError};
use crate::agents::factory::AgentFactory;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Agent with ID {0} already exists")]
    DuplicateId(String),
    #[error("Agent with ID {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Creation(#[from] AgentError),
}

enum Slot {
    /// Id claimed by a creation that has not finished yet.
    Reserved,
    Ready(Arc<dyn Agent>),
}

impl Slot {
    fn ready(&self) -> Option<&Arc<dyn Agent>> {
        match self {
            Slot::Ready(agent) => Some(agent),
            Slot::Reserved => None,
        }
    }
}

type AgentMap = Mutex<HashMap<String, Slot>>;

fn lock(agents: &AgentMap) -> MutexGuard<'_, HashMap<String, Slot>> {
    // Map operations cannot leave the map half-updated, so a poisoned lock
    // is still consistent.
    agents.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Claim on an id while its agent is being created.
///
/// Dropping the reservation without [`Reservation::commit`] frees the id,
/// including when the `create_agent` future is cancelled mid-creation.
struct Reservation<'a> {
    agents: &'a AgentMap,
    id: &'a str,
    committed: bool,
}

impl<'a> Reservation<'a> {
    fn claim(agents: &'a AgentMap, id: &'a str) -> Option<Self> {
        let mut map = lock(agents);
        if map.contains_key(id) {
            return None;
        }
        map.insert(id.to_string(), Slot::Reserved);
        Some(Self {
            agents,
            id,
            committed: false,
        })
    }

    fn commit(mut self, agent: Arc<dyn Agent>) {
        lock(self.agents).insert(self.id.to_string(), Slot::Ready(agent));
        self.committed = true;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let mut map = lock(self.agents);
        if matches!(map.get(self.id), Some(Slot::Reserved)) {
            map.remove(self.id);
            debug!(agent_id = %self.id, "Released reservation");
        }
    }
}

/// Concurrent registry of live agents.
///
/// The id map is locked only for the map operation itself and never across
/// an `.await`. Agent initialization and message processing run outside the
/// lock, so a slow agent never blocks operations on other ids.
pub struct AgentManager {
    factory: AgentFactory,
    agents: AgentMap,
}

impl AgentManager {
    /// Create an empty manager that builds agents with `factory`.
    pub fn new(factory: AgentFactory) -> Self {
        Self {
            factory,
            agents: Mutex::new(HashMap::new()),
        }
    }

    pub fn factory(&self) -> &AgentFactory {
        &self.factory
    }

    /// Create, initialize and register an agent.
    ///
    /// # Arguments
    ///
    /// * `agent_type` - Type name understood by the factory
    /// * `id` - Identifier, unique within this manager
    /// * `config` - JSON configuration for the agent
    ///
    /// # Errors
    ///
    /// - [`ManagerError::DuplicateId`] if `id` is registered or being created
    /// - [`ManagerError::Creation`] if the factory fails; the id is free again
    ///
    /// Cancelling the returned future (for example with
    /// `tokio::time::timeout`) also frees the id.
    pub async fn create_agent(
        &self,
        agent_type: &str,
        id: &str,
        config: &str,
    ) -> Result<(), ManagerError> {
        let Some(reservation) = Reservation::claim(&self.agents, id) else {
            warn!(agent_id = %id, "Agent with this ID already exists");
            return Err(ManagerError::DuplicateId(id.to_string()));
        };

        let agent = self.factory.create(agent_type, id, config).await?;
        reservation.commit(agent);
        info!(agent_id = %id, agent_type = %agent_type, "Created agent");
        Ok(())
    }

    /// Remove an agent and release it.
    ///
    /// # Returns
    ///
    /// `true` if a registered agent was removed, `false` if `id` is unknown
    /// or still being created.
    pub async fn destroy_agent(&self, id: &str) -> bool {
        let removed = {
            let mut agents = lock(&self.agents);
            match agents.get(id) {
                Some(Slot::Ready(_)) => agents.remove(id),
                _ => None,
            }
        };

        match removed {
            Some(slot) => {
                // Released outside the lock; a learning agent saves its
                // snapshot here unless a message delivery still holds it.
                drop(slot);
                info!(agent_id = %id, "Destroyed agent");
                true
            }
            None => {
                warn!(agent_id = %id, "Agent with this ID not found");
                false
            }
        }
    }

    /// Deliver `message` to agent `id` and return its response verbatim.
    ///
    /// # Errors
    ///
    /// [`ManagerError::NotFound`] if no agent is registered under `id`.
    pub async fn send_message(&self, id: &str, message: &str) -> Result<String, ManagerError> {
        let agent = self.get(id).ok_or_else(|| {
            warn!(agent_id = %id, "Agent with this ID not found");
            ManagerError::NotFound(id.to_string())
        })?;

        debug!(agent_id = %id, "Delivering message");
        Ok(agent.process_message(message).await)
    }

    pub async fn agent_exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids of all registered agents, in no particular order.
    pub async fn list_agent_ids(&self) -> Vec<String> {
        lock(&self.agents)
            .iter()
            .filter(|(_, slot)| slot.ready().is_some())
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub async fn agent_count(&self) -> usize {
        lock(&self.agents)
            .values()
            .filter(|slot| slot.ready().is_some())
            .count()
    }

    /// Remove and release every registered agent.
    ///
    /// Creations still in flight keep their reservation and register when
    /// they complete.
    pub async fn shutdown(&self) {
        let drained: Vec<Arc<dyn Agent>> = {
            let mut agents = lock(&self.agents);
            let ids: Vec<String> = agents
                .iter()
                .filter(|(_, slot)| slot.ready().is_some())
                .map(|(id, _)| id.clone())
                .collect();
            ids.iter()
                .filter_map(|id| match agents.remove(id) {
                    Some(Slot::Ready(agent)) => Some(agent),
                    _ => None,
                })
                .collect()
        };

        let count = drained.len();
        drop(drained);
        info!(agents = count, "Agent manager shut down");
    }

    fn get(&self, id: &str) -> Option<Arc<dyn Agent>> {
        lock(&self.agents).get(id).and_then(Slot::ready).cloned()
    }
}
