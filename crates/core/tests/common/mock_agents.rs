//! Mock agent implementations for observing concurrent deliveries.

use ar_core::agents::{Agent, AgentError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Tracks how many `process_message` calls are running at once.
#[derive(Clone, Default)]
pub struct InFlightGauge {
    current: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl InFlightGauge {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }
}

/// An agent that sleeps inside `process_message` and echoes its input.
pub struct GaugeAgent {
    id: String,
    gauge: InFlightGauge,
    delay: Duration,
}

impl GaugeAgent {
    pub fn new(id: &str, gauge: InFlightGauge, delay: Duration) -> Self {
        Self {
            id: id.to_string(),
            gauge,
            delay,
        }
    }
}

#[async_trait]
impl Agent for GaugeAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn initialize(&mut self, _config: &str) -> Result<(), AgentError> {
        Ok(())
    }

    async fn process_message(&self, message: &str) -> String {
        self.gauge.enter();
        tokio::time::sleep(self.delay).await;
        self.gauge.leave();
        format!("{}: {}", self.id, message)
    }
}
