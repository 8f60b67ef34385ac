use std::sync::{mpsc, Arc};
use std::thread;

use dm_logging::dm_warn;

use crate::sequence::{run_sequence, ChannelProgressSink};
use crate::{
    Dispatcher, EngineError, EngineEvent, OutboundMessage, RunId, SendSettings,
    SimulatedDispatcher,
};

enum EngineCommand {
    StartRun {
        run_id: RunId,
        entries: Vec<OutboundMessage>,
    },
}

/// Owns the engine thread and its tokio runtime.
///
/// Dropping the handle closes the command channel, which stops the thread
/// and any run still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SendSettings) -> Result<Self, EngineError> {
        Self::with_dispatcher(Arc::new(SimulatedDispatcher::new(settings)))
    }

    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dm-engine-worker")
            .enable_time()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("dm-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let dispatcher = dispatcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(dispatcher.as_ref(), command, event_tx).await;
                    });
                }
            })
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn start_run(&self, run_id: RunId, entries: Vec<OutboundMessage>) {
        if self
            .cmd_tx
            .send(EngineCommand::StartRun { run_id, entries })
            .is_err()
        {
            dm_warn!("engine thread is gone; run {} dropped", run_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    dispatcher: &dyn Dispatcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::StartRun { run_id, entries } => {
            let sink = ChannelProgressSink::new(event_tx);
            run_sequence(dispatcher, run_id, &entries, &sink).await;
        }
    }
}
