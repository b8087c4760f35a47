//! Agent abstraction and management.
//!
//! This module provides the `Agent` trait, the built-in agent adapters, the
//! `AgentFactory` that creates them by type name and the `AgentManager` that
//! owns them by id.

pub mod adapters;
pub mod agent_type;
pub mod base;
pub mod factory;
pub mod manager;

pub use adapters::{LearningAgent, MockAgent, RuleBasedAgent};
pub use agent_type::AgentType;
pub use base::{parse_config, Agent, AgentError};
pub use factory::{AgentConstructor, AgentFactory};
pub use manager::{AgentManager, ManagerError};
