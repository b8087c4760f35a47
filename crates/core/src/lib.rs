//! # ar-core
//!
//! Core agent runtime.
//!
//! This crate provides:
//! - The `Agent` abstraction with rule-based and learning implementations
//! - A factory creating agents by type name
//! - A concurrent manager owning agents by id
//! - Configuration loading and a runtime facade for transports
//!
//! ## Modules
//!
//! - [`agents`]: Agent trait, adapters, factory and manager
//! - [`rules`]: Priority-ordered regex rules and template rendering
//! - [`memory`]: Bounded associative memory and its snapshots
//! - [`config`]: Runtime configuration loading
//! - [`runtime`]: Bootstrap and `Op` dispatch

pub mod agents;
pub mod config;
pub mod memory;
pub mod rules;
pub mod runtime;

pub use runtime::Runtime;
