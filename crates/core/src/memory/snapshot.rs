//! Durable per-agent memory snapshots.
//!
//! A snapshot is a pretty-printed JSON object mapping each associative key to
//! its array of responses. There is one file per agent, named after the
//! agent id.

use crate::memory::error::{MemoryError, MemoryResult};
use crate::memory::store::ResponseMemory;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Path of the snapshot file for `agent_id` inside `dir`.
///
/// The id is percent-encoded: distinct ids always get distinct files and no
/// id can name a file outside `dir`.
pub fn snapshot_path(dir: &Path, agent_id: &str) -> PathBuf {
    dir.join(format!("memory_{}.json", urlencoding::encode(agent_id)))
}

/// Write `memory` to `path`, creating the parent directory if needed.
///
/// This is synchronous so that it can run while an agent is being dropped.
pub fn save_snapshot(path: &Path, memory: &ResponseMemory) -> MemoryResult<()> {
    let buf = encode_snapshot(memory)?;

    if let Some(parent) = snapshot_dir(path) {
        std::fs::create_dir_all(parent).map_err(|source| write_error(path, source))?;
    }
    std::fs::write(path, buf).map_err(|source| write_error(path, source))
}

/// Asynchronous [`save_snapshot`] for callers running on the runtime.
pub async fn write_snapshot(path: &Path, memory: &ResponseMemory) -> MemoryResult<()> {
    let buf = encode_snapshot(memory)?;

    if let Some(parent) = snapshot_dir(path) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| write_error(path, source))?;
    }
    tokio::fs::write(path, buf)
        .await
        .map_err(|source| write_error(path, source))
}

fn encode_snapshot(memory: &ResponseMemory) -> MemoryResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    memory
        .to_map()
        .serialize(&mut serializer)
        .map_err(MemoryError::Serialize)?;
    Ok(buf)
}

fn snapshot_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

fn write_error(path: &Path, source: std::io::Error) -> MemoryError {
    MemoryError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Read the snapshot at `path`.
pub async fn load_snapshot(path: &Path) -> MemoryResult<ResponseMemory> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MemoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let map: BTreeMap<String, Vec<String>> =
        serde_json::from_str(&content).map_err(|source| MemoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ResponseMemory::from_map(map))
}
