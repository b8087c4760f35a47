//! Learning agent: answers from an associative memory it keeps growing.

use crate::agents::base::{parse_config, Agent, AgentError};
use crate::memory::{
    associative_key, load_snapshot, save_snapshot, snapshot_path, tokenize, write_snapshot,
    MemoryError, MemoryResult, ResponseMemory,
};
use ar_protocol::LearningConfig;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Response for a message without any usable token.
pub const EMPTY_MESSAGE_RESPONSE: &str = "I don't understand your message.";

/// Response for a key with nothing remembered yet.
pub const UNKNOWN_KEY_RESPONSE: &str = "I'm still learning how to respond to that.";

/// Agent that recalls responses by associative key and records every reply.
///
/// Each processed message stores the reply just given under the key of the
/// incoming message, so frequent inputs converge on repeating their answers.
/// The memory is written to a per-id snapshot when the agent is dropped and
/// restored on the next initialization without seed memory.
pub struct LearningAgent {
    id: String,
    learning_rate: f64,
    memory: Mutex<ResponseMemory>,
    snapshot_path: PathBuf,
    // Only an initialized agent owns its snapshot; a discarded one must not
    // overwrite it.
    persist_on_drop: bool,
}

impl LearningAgent {
    /// Create an agent whose snapshot lives in `memory_dir`.
    pub fn new(id: impl Into<String>, memory_dir: &Path) -> Self {
        let id = id.into();
        let snapshot_path = snapshot_path(memory_dir, &id);
        Self {
            id,
            learning_rate: LearningConfig::default().learning_rate,
            memory: Mutex::new(ResponseMemory::new()),
            snapshot_path,
            persist_on_drop: false,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Copy of the current memory as a plain map.
    pub async fn memory_snapshot(&self) -> BTreeMap<String, Vec<String>> {
        self.memory.lock().await.to_map()
    }

    /// Write the current memory to the snapshot file.
    ///
    /// The memory is copied first so deliveries are not held up by the write.
    pub async fn save_memory(&self) -> MemoryResult<()> {
        let memory = self.memory.lock().await.clone();
        write_snapshot(&self.snapshot_path, &memory).await
    }

    async fn restore_memory(&self) -> ResponseMemory {
        match load_snapshot(&self.snapshot_path).await {
            Ok(memory) => {
                info!(agent_id = %self.id, keys = memory.len(), "Loaded memory snapshot");
                memory
            }
            Err(MemoryError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(agent_id = %self.id, "No memory snapshot, starting empty");
                ResponseMemory::new()
            }
            Err(e) => {
                warn!(agent_id = %self.id, error = %e, "Could not restore memory, starting empty");
                ResponseMemory::new()
            }
        }
    }
}

#[async_trait]
impl Agent for LearningAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn initialize(&mut self, config: &str) -> Result<(), AgentError> {
        let config: LearningConfig = parse_config(&self.id, config)?;
        self.learning_rate = config.learning_rate;

        let memory = match config.initial_memory {
            Some(seed) => ResponseMemory::from_map(seed),
            None => self.restore_memory().await,
        };
        let keys = memory.len();
        *self.memory.get_mut() = memory;
        self.persist_on_drop = true;

        info!(
            agent_id = %self.id,
            learning_rate = self.learning_rate,
            keys,
            "LearningAgent initialized"
        );
        Ok(())
    }

    async fn process_message(&self, message: &str) -> String {
        let Some(key) = associative_key(&tokenize(message)) else {
            return EMPTY_MESSAGE_RESPONSE.to_string();
        };

        let mut memory = self.memory.lock().await;
        let response = memory
            .recall(&key, &mut rand::rng())
            .map_or_else(|| UNKNOWN_KEY_RESPONSE.to_string(), str::to_string);
        memory.record(key, response.clone());

        debug!(agent_id = %self.id, "LearningAgent processed message");
        response
    }
}

impl Drop for LearningAgent {
    fn drop(&mut self) {
        if !self.persist_on_drop {
            return;
        }
        match save_snapshot(&self.snapshot_path, self.memory.get_mut()) {
            Ok(()) => debug!(agent_id = %self.id, path = %self.snapshot_path.display(), "Saved memory snapshot"),
            Err(e) => error!(agent_id = %self.id, error = %e, "Failed to save memory snapshot"),
        }
    }
}
