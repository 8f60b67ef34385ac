use std::thread;
use std::time::{Duration, Instant};

use dm_engine::{EngineEvent, EngineHandle, OutboundMessage, SendSettings};

fn collect_until_completed(engine: &EngineHandle, timeout: Duration) -> Vec<EngineEvent> {
    let deadline = Instant::now() + timeout;
    let mut events = Vec::new();
    while Instant::now() < deadline {
        match engine.try_recv() {
            Some(event) => {
                let done = matches!(event, EngineEvent::RunCompleted { .. });
                events.push(event);
                if done {
                    break;
                }
            }
            None => thread::sleep(Duration::from_millis(5)),
        }
    }
    events
}

#[test]
fn handle_runs_sequence_and_delivers_events() {
    let engine = EngineHandle::new(SendSettings {
        step_delay: Duration::from_millis(5),
    })
    .expect("engine starts");

    engine.start_run(
        3,
        vec![
            OutboundMessage {
                identifier: "alice".to_string(),
                message: "hi".to_string(),
            },
            OutboundMessage {
                identifier: "bob".to_string(),
                message: "hi".to_string(),
            },
        ],
    );

    let events = collect_until_completed(&engine, Duration::from_secs(5));
    let identifiers: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::Progress(progress) => Some(progress.identifier.as_str()),
            EngineEvent::RunCompleted { .. } => None,
        })
        .collect();
    assert_eq!(identifiers, vec!["alice", "bob"]);
    assert_eq!(
        events.last(),
        Some(&EngineEvent::RunCompleted { run_id: 3, sent: 2 })
    );
}

#[test]
fn try_recv_is_empty_before_any_run() {
    let engine = EngineHandle::new(SendSettings::default()).expect("engine starts");
    assert_eq!(engine.try_recv(), None);
}
