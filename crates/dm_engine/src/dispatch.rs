use std::time::Duration;

use crate::OutboundMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSettings {
    /// Pause before each entry is reported as sent.
    pub step_delay: Duration,
}

impl Default for SendSettings {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(1000),
        }
    }
}

/// Delivers a single message. Implementations cannot fail; a real transport
/// with retries would have to widen this signature.
#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, message: &OutboundMessage);
}

/// Pretends to send by sleeping for `SendSettings::step_delay`.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDispatcher {
    settings: SendSettings,
}

impl SimulatedDispatcher {
    pub fn new(settings: SendSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SendSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl Dispatcher for SimulatedDispatcher {
    async fn dispatch(&self, _message: &OutboundMessage) {
        tokio::time::sleep(self.settings.step_delay).await;
    }
}
