use std::sync::{Arc, Mutex};
use std::time::Duration;

use dm_engine::{
    run_sequence, Dispatcher, EngineEvent, OutboundMessage, ProgressSink, SendProgress,
    SendSettings, SimulatedDispatcher,
};
use pretty_assertions::assert_eq;
use tokio::time::Instant;

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<(Instant, EngineEvent)>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Vec<(Instant, EngineEvent)> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push((Instant::now(), event));
    }
}

fn outbound(identifiers: &[&str]) -> Vec<OutboundMessage> {
    identifiers
        .iter()
        .map(|identifier| OutboundMessage {
            identifier: identifier.to_string(),
            message: "hi".to_string(),
        })
        .collect()
}

#[test]
fn default_delay_is_one_second() {
    assert_eq!(SendSettings::default().step_delay, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn reports_each_entry_in_order_then_completes() {
    let dispatcher = SimulatedDispatcher::new(SendSettings::default());
    let sink = TestSink::new();

    run_sequence(&dispatcher, 4, &outbound(&["alice", "bob", "carol"]), &sink).await;

    let events: Vec<_> = sink.take().into_iter().map(|(_, event)| event).collect();
    assert_eq!(
        events,
        vec![
            EngineEvent::Progress(SendProgress {
                run_id: 4,
                completed: 1,
                total: 3,
                identifier: "alice".to_string(),
            }),
            EngineEvent::Progress(SendProgress {
                run_id: 4,
                completed: 2,
                total: 3,
                identifier: "bob".to_string(),
            }),
            EngineEvent::Progress(SendProgress {
                run_id: 4,
                completed: 3,
                total: 3,
                identifier: "carol".to_string(),
            }),
            EngineEvent::RunCompleted { run_id: 4, sent: 3 },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn progress_updates_are_spaced_by_the_step_delay() {
    let delay = Duration::from_millis(250);
    let dispatcher = SimulatedDispatcher::new(SendSettings { step_delay: delay });
    let sink = TestSink::new();
    let started = Instant::now();

    run_sequence(&dispatcher, 1, &outbound(&["a", "b", "c"]), &sink).await;

    let stamps: Vec<Instant> = sink
        .take()
        .into_iter()
        .filter_map(|(at, event)| matches!(event, EngineEvent::Progress(_)).then_some(at))
        .collect();
    assert_eq!(stamps.len(), 3);
    assert!(stamps[0] - started >= delay);
    for pair in stamps.windows(2) {
        assert!(pair[1] - pair[0] >= delay);
    }
    assert!(started.elapsed() >= delay * 3);
}

/// Records the interleaving of dispatch calls and progress events.
struct TracingDispatcher {
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl Dispatcher for TracingDispatcher {
    async fn dispatch(&self, message: &OutboundMessage) {
        self.log
            .lock()
            .unwrap()
            .push(format!("start {}", message.identifier));
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.log
            .lock()
            .unwrap()
            .push(format!("end {}", message.identifier));
    }
}

struct TracingSink {
    log: Arc<Mutex<Vec<String>>>,
}

impl ProgressSink for TracingSink {
    fn emit(&self, event: EngineEvent) {
        let line = match event {
            EngineEvent::Progress(progress) => format!("progress {}", progress.identifier),
            EngineEvent::RunCompleted { sent, .. } => format!("done {sent}"),
        };
        self.log.lock().unwrap().push(line);
    }
}

#[tokio::test(start_paused = true)]
async fn next_entry_waits_for_previous_progress() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let dispatcher = TracingDispatcher { log: log.clone() };
    let sink = TracingSink { log: log.clone() };

    run_sequence(&dispatcher, 1, &outbound(&["x", "y"]), &sink).await;

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "start x",
            "end x",
            "progress x",
            "start y",
            "end y",
            "progress y",
            "done 2",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn empty_run_completes_immediately() {
    let dispatcher = SimulatedDispatcher::default();
    let sink = TestSink::new();
    let started = Instant::now();

    run_sequence(&dispatcher, 9, &[], &sink).await;

    let events: Vec<_> = sink.take().into_iter().map(|(_, event)| event).collect();
    assert_eq!(events, vec![EngineEvent::RunCompleted { run_id: 9, sent: 0 }]);
    assert_eq!(started.elapsed(), Duration::ZERO);
}
