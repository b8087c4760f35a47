//! Transport-facing protocol.
//!
//! This module defines the message types exchanged between a transport
//! (stdio, HTTP, WebSocket, ...) and the runtime core.
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: requests sent from a transport to the runtime
//! - `Event`: replies sent from the runtime back to the transport
//!
//! Every `Op` is answered by exactly one `Event`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Operations sent from a transport to the runtime.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "sendMessage",
///   "payload": {
///     "id": "greeter",
///     "message": "hello world"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Create and initialize a new agent.
    CreateAgent {
        /// Agent type name, e.g. `rule_based`.
        agent_type: String,
        /// Identifier; must not already be registered.
        id: String,
        /// Type-specific configuration. `null` or absent means `{}`.
        #[serde(default)]
        config: serde_json::Value,
    },

    /// List the ids of all live agents.
    ListAgents,

    /// Destroy an agent.
    DeleteAgent { id: String },

    /// Deliver a text message to an agent.
    SendMessage { id: String, message: String },

    /// Release every agent and stop serving.
    Shutdown,
}

/// Events sent from the runtime back to a transport.
///
/// Uses the same tagged layout as [`Op`]:
/// ```json
/// {
///   "type": "messageResponse",
///   "payload": {
///     "id": "greeter",
///     "response": "Hi there!"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// Result of a `CreateAgent` operation.
    AgentCreated { id: String, success: bool },

    /// Result of a `ListAgents` operation. Order is unspecified.
    AgentList { ids: Vec<String> },

    /// Result of a `DeleteAgent` operation.
    AgentDeleted { id: String, success: bool },

    /// The agent's reply to a `SendMessage` operation.
    MessageResponse { id: String, response: String },

    /// The operation could not be carried out (unknown agent, bad request).
    Error { message: String },

    /// All agents have been released.
    ShutdownComplete,
}
