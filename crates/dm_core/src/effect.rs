use crate::{QueueEntry, RunId};

/// Side effects requested by `update`, executed outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the send sequence over a snapshot of the queue, in order.
    StartSend {
        run_id: RunId,
        entries: Vec<QueueEntry>,
    },
}
