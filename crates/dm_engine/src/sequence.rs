use std::sync::mpsc;

use dm_logging::{dm_debug, dm_info};

use crate::{Dispatcher, EngineEvent, OutboundMessage, RunId, SendProgress};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Sends `entries` one after another, reporting after each one and once at the end.
///
/// Entry `i + 1` is not handed to the dispatcher until the progress event for
/// entry `i` has been emitted.
pub async fn run_sequence(
    dispatcher: &dyn Dispatcher,
    run_id: RunId,
    entries: &[OutboundMessage],
    sink: &dyn ProgressSink,
) {
    let total = entries.len();
    dm_info!("run {} started: {} message(s)", run_id, total);

    for (index, entry) in entries.iter().enumerate() {
        dispatcher.dispatch(entry).await;
        dm_debug!(
            "run {} sent {}/{} identifier={}",
            run_id,
            index + 1,
            total,
            entry.identifier
        );
        sink.emit(EngineEvent::Progress(SendProgress {
            run_id,
            completed: index + 1,
            total,
            identifier: entry.identifier.clone(),
        }));
    }

    dm_info!("run {} completed: {} message(s)", run_id, total);
    sink.emit(EngineEvent::RunCompleted {
        run_id,
        sent: total,
    });
}
