use std::io;

use thiserror::Error;

pub type RunId = u64;

/// A message handed to a `Dispatcher`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub identifier: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendProgress {
    pub run_id: RunId,
    /// One-based count of entries finished so far.
    pub completed: usize,
    pub total: usize,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(SendProgress),
    RunCompleted { run_id: RunId, sent: usize },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to build async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] io::Error),
}
