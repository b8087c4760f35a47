//! Associative response memory used by learning agents.
//!
//! This module provides:
//! - Message normalization and associative key derivation ([`keys`])
//! - The bounded, FIFO-evicting response store ([`store`])
//! - Durable per-agent snapshots ([`snapshot`])

pub mod error;
pub mod keys;
pub mod snapshot;
pub mod store;

pub use error::{MemoryError, MemoryResult};
pub use keys::{associative_key, tokenize};
pub use snapshot::{load_snapshot, save_snapshot, snapshot_path, write_snapshot};
pub use store::{ResponseMemory, MAX_RESPONSES_PER_KEY};
