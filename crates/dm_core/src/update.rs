use crate::{parse_identifiers, AppState, Effect, Msg, QueueEntry};

/// Pure update function: applies a message to state and returns any effects.
///
/// Actions whose guard does not hold (empty fields, empty queue, a send
/// already running) leave the state untouched and return no effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::IdentifierChanged(text) => {
            state.set_pending_identifier(text);
            Vec::new()
        }
        Msg::MessageChanged(text) => {
            state.set_pending_message(text);
            Vec::new()
        }
        Msg::BulkTextChanged(text) => {
            state.set_pending_bulk_text(text);
            Vec::new()
        }
        Msg::AddSingleClicked => {
            if state.can_add_single() {
                let entry = state.take_single_entry();
                state.set_status(format!("Added @{} to queue", entry.identifier));
                state.push_entry(entry);
            }
            Vec::new()
        }
        Msg::AddBulkClicked => {
            let identifiers = parse_identifiers(state.pending_bulk_text());
            if identifiers.is_empty() || state.pending_message().is_empty() {
                return (state, Vec::new());
            }
            let count = identifiers.len();
            let message = state.pending_message().to_owned();
            state.extend_entries(
                identifiers
                    .into_iter()
                    .map(|identifier| QueueEntry::new(identifier, message.clone())),
            );
            state.clear_bulk_text();
            state.set_status(format!("Added {count} recipients to queue"));
            Vec::new()
        }
        Msg::RemoveClicked { position } => {
            state.remove_entry(position);
            Vec::new()
        }
        Msg::SendClicked => match state.begin_send() {
            Some((run_id, entries)) => {
                state.set_status("Sending DMs...".to_string());
                vec![Effect::StartSend { run_id, entries }]
            }
            None => Vec::new(),
        },
        Msg::SendProgress {
            run_id,
            completed,
            total,
            identifier,
        } => {
            if state.active_run() == Some(run_id) {
                state.set_status(format!("Sent DM {completed}/{total} to @{identifier}"));
            }
            Vec::new()
        }
        Msg::SendFinished { run_id, sent } => {
            if state.active_run() == Some(run_id) {
                state.finish_send();
                state.set_status(format!("✓ Successfully sent {sent} DMs"));
            }
            Vec::new()
        }
        Msg::FocusNext => {
            state.set_focus(state.focus().next());
            Vec::new()
        }
        Msg::FocusPrevious => {
            state.set_focus(state.focus().previous());
            Vec::new()
        }
        Msg::SelectNext => {
            state.select_next();
            Vec::new()
        }
        Msg::SelectPrevious => {
            state.select_previous();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
