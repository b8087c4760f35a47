//! # ar-protocol
//!
//! Core protocol definitions and data models for agent-runtime.
//!
//! This crate defines all shared data structures used for:
//! - Per-agent configuration payloads (rule-based and learning agents)
//! - Runtime configuration (logging, memory directory, startup agents)
//! - The operation/event protocol spoken by transports
//!
//! ## Modules
//!
//! - [`agent_models`]: Agent declarations and per-type configuration payloads
//! - [`config_models`]: Runtime configuration loaded at startup
//! - [`ipc`]: Operations and Events exchanged with transports
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde, serde_json and ts-rs
//! - TypeScript generation: wire types derive `TS` for client compatibility
//! - Independent compilation: no dependencies on other agent-runtime crates

pub mod agent_models;
pub mod config_models;
pub mod ipc;

// Re-export all public types for convenience
pub use agent_models::*;
pub use config_models::*;
pub use ipc::*;
