use dm_core::{Effect, Msg, QueueEntry};
use dm_engine::{EngineError, EngineEvent, EngineHandle, OutboundMessage, SendSettings};
use dm_logging::dm_info;

/// Bridges core effects to the engine, and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SendSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSend { run_id, entries } => {
                    dm_info!("StartSend run_id={} entries={}", run_id, entries.len());
                    self.engine
                        .start_run(run_id, entries.into_iter().map(to_outbound).collect());
                }
            }
        }
    }

    /// Collects every engine event that arrived since the last call.
    pub fn drain_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn to_outbound(entry: QueueEntry) -> OutboundMessage {
    OutboundMessage {
        identifier: entry.identifier,
        message: entry.message,
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress(progress) => Msg::SendProgress {
            run_id: progress.run_id,
            completed: progress.completed,
            total: progress.total,
            identifier: progress.identifier,
        },
        EngineEvent::RunCompleted { run_id, sent } => Msg::SendFinished { run_id, sent },
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::{Duration, Instant};

    use dm_engine::SendProgress;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn progress_maps_to_send_progress() {
        let msg = map_event(EngineEvent::Progress(SendProgress {
            run_id: 2,
            completed: 1,
            total: 5,
            identifier: "alice".to_string(),
        }));

        assert_eq!(
            msg,
            Msg::SendProgress {
                run_id: 2,
                completed: 1,
                total: 5,
                identifier: "alice".to_string(),
            }
        );
    }

    #[test]
    fn completion_maps_to_send_finished() {
        assert_eq!(
            map_event(EngineEvent::RunCompleted { run_id: 7, sent: 3 }),
            Msg::SendFinished { run_id: 7, sent: 3 }
        );
    }

    #[test]
    fn start_send_round_trips_through_the_engine() {
        let runner = EffectRunner::new(SendSettings {
            step_delay: Duration::from_millis(1),
        })
        .unwrap();
        runner.enqueue(vec![Effect::StartSend {
            run_id: 1,
            entries: vec![QueueEntry::new("alice", "hi")],
        }]);

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut inbox = Vec::new();
        while Instant::now() < deadline
            && !inbox
                .iter()
                .any(|msg| matches!(msg, Msg::SendFinished { .. }))
        {
            inbox.extend(runner.drain_events());
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(
            inbox,
            vec![
                Msg::SendProgress {
                    run_id: 1,
                    completed: 1,
                    total: 1,
                    identifier: "alice".to_string(),
                },
                Msg::SendFinished { run_id: 1, sent: 1 },
            ]
        );
    }
}
