//! Auto DM engine: runs send sequences off the UI thread.
mod dispatch;
mod engine;
mod sequence;
mod types;

pub use dispatch::{Dispatcher, SendSettings, SimulatedDispatcher};
pub use engine::EngineHandle;
pub use sequence::{run_sequence, ChannelProgressSink, ProgressSink};
pub use types::{EngineError, EngineEvent, OutboundMessage, RunId, SendProgress};
