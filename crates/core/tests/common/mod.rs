//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - Fixtures (agent configurations, factories over temp directories)
//! - Mock agents for observing concurrency

// Each test binary compiles this module but uses only part of it.
#![allow(dead_code)]

pub mod fixtures;
pub mod mock_agents;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_agents::*;
