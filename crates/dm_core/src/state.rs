use crate::view_model::{AppViewModel, QueueRowView};

pub type RunId = u64;

/// One recipient/message pair waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub identifier: String,
    pub message: String,
}

impl QueueEntry {
    pub fn new(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending {
        run_id: RunId,
    },
}

/// Which form area receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Identifier,
    Message,
    Bulk,
    Queue,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Identifier => Focus::Message,
            Focus::Message => Focus::Bulk,
            Focus::Bulk => Focus::Queue,
            Focus::Queue => Focus::Identifier,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Identifier => Focus::Queue,
            Focus::Message => Focus::Identifier,
            Focus::Bulk => Focus::Message,
            Focus::Queue => Focus::Bulk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pending_identifier: String,
    pending_message: String,
    pending_bulk_text: String,
    status_text: String,
    send_state: SendState,
    queue: Vec<QueueEntry>,
    focus: Focus,
    selected: Option<usize>,
    last_run_id: RunId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let queue_len = self.queue.len();
        let sending = self.is_sending();
        AppViewModel {
            identifier: self.pending_identifier.clone(),
            message: self.pending_message.clone(),
            bulk_text: self.pending_bulk_text.clone(),
            status: (!self.status_text.is_empty()).then(|| self.status_text.clone()),
            sending,
            queue: self
                .queue
                .iter()
                .enumerate()
                .map(|(position, entry)| QueueRowView {
                    position,
                    identifier: entry.identifier.clone(),
                    message: entry.message.clone(),
                })
                .collect(),
            queue_len,
            queue_heading: format!("Message Queue ({queue_len})"),
            focus: self.focus,
            selected: self.selected,
            can_add_single: self.can_add_single(),
            can_add_bulk: self.can_add_bulk(),
            can_send: self.can_send(),
            send_label: if sending {
                "Sending...".to_string()
            } else {
                format!("Send {queue_len} DMs")
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn queue(&self) -> &[QueueEntry] {
        &self.queue
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn send_state(&self) -> SendState {
        self.send_state
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.send_state, SendState::Sending { .. })
    }

    pub fn active_run(&self) -> Option<RunId> {
        match self.send_state {
            SendState::Sending { run_id } => Some(run_id),
            SendState::Idle => None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn pending_bulk_text(&self) -> &str {
        &self.pending_bulk_text
    }

    pub(crate) fn pending_message(&self) -> &str {
        &self.pending_message
    }

    pub fn can_add_single(&self) -> bool {
        !self.pending_identifier.is_empty() && !self.pending_message.is_empty()
    }

    /// Availability follows the raw text; an all-blank paste still enables
    /// the action but adds nothing.
    pub fn can_add_bulk(&self) -> bool {
        !self.pending_bulk_text.is_empty() && !self.pending_message.is_empty()
    }

    pub fn can_send(&self) -> bool {
        !self.queue.is_empty() && !self.is_sending()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_pending_identifier(&mut self, text: String) {
        if self.pending_identifier != text {
            self.pending_identifier = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_pending_message(&mut self, text: String) {
        if self.pending_message != text {
            self.pending_message = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_pending_bulk_text(&mut self, text: String) {
        if self.pending_bulk_text != text {
            self.pending_bulk_text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_status(&mut self, text: String) {
        self.status_text = text;
        self.mark_dirty();
    }

    /// Moves the single-entry fields into a new queue entry, leaving them empty.
    pub(crate) fn take_single_entry(&mut self) -> QueueEntry {
        self.mark_dirty();
        QueueEntry {
            identifier: std::mem::take(&mut self.pending_identifier),
            message: std::mem::take(&mut self.pending_message),
        }
    }

    pub(crate) fn clear_bulk_text(&mut self) {
        self.pending_bulk_text.clear();
        self.mark_dirty();
    }

    pub(crate) fn push_entry(&mut self, entry: QueueEntry) {
        self.queue.push(entry);
        self.mark_dirty();
    }

    pub(crate) fn extend_entries(&mut self, entries: impl IntoIterator<Item = QueueEntry>) {
        self.queue.extend(entries);
        self.mark_dirty();
    }

    pub(crate) fn remove_entry(&mut self, position: usize) -> Option<QueueEntry> {
        if position >= self.queue.len() {
            return None;
        }
        let removed = self.queue.remove(position);
        self.clamp_selection();
        self.mark_dirty();
        Some(removed)
    }

    /// Moves Idle to Sending and hands back the snapshot to send.
    pub(crate) fn begin_send(&mut self) -> Option<(RunId, Vec<QueueEntry>)> {
        if !self.can_send() {
            return None;
        }
        self.last_run_id += 1;
        let run_id = self.last_run_id;
        self.send_state = SendState::Sending { run_id };
        self.mark_dirty();
        Some((run_id, self.queue.clone()))
    }

    /// Moves Sending back to Idle and discards every queued entry.
    pub(crate) fn finish_send(&mut self) {
        self.send_state = SendState::Idle;
        self.queue.clear();
        self.selected = None;
        self.mark_dirty();
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        if focus == Focus::Queue && self.selected.is_none() && !self.queue.is_empty() {
            self.selected = Some(0);
        }
        self.mark_dirty();
    }

    pub(crate) fn select_next(&mut self) {
        let Some(last) = self.queue.len().checked_sub(1) else {
            return;
        };
        let next = match self.selected {
            Some(current) => (current + 1).min(last),
            None => 0,
        };
        if self.selected != Some(next) {
            self.selected = Some(next);
            self.mark_dirty();
        }
    }

    pub(crate) fn select_previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        let previous = self.selected.map_or(0, |current| current.saturating_sub(1));
        if self.selected != Some(previous) {
            self.selected = Some(previous);
            self.mark_dirty();
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.queue.len().checked_sub(1)) {
            (Some(current), Some(last)) => Some(current.min(last)),
            _ => None,
        };
    }
}

/// Splits bulk input into identifiers: one per line, trimmed, blanks dropped.
pub fn parse_identifiers(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_identifiers_handles_crlf_and_blank_lines() {
        assert_eq!(
            parse_identifiers("alice\r\n\r\n  bob  \n\t\n"),
            vec!["alice".to_string(), "bob".to_string()]
        );
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        let mut focus = Focus::Identifier;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Identifier);
        assert_eq!(Focus::Identifier.previous(), Focus::Queue);
        assert_eq!(Focus::Queue.previous().previous(), Focus::Message);
    }

    #[test]
    fn removal_clamps_selection_to_new_tail() {
        let mut state = AppState::new();
        state.extend_entries([QueueEntry::new("a", "m"), QueueEntry::new("b", "m")]);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected(), Some(1));

        state.remove_entry(1);
        assert_eq!(state.selected(), Some(0));
        state.remove_entry(0);
        assert_eq!(state.selected(), None);
    }
}
