use crate::Focus;

/// Everything the UI needs to draw one frame, detached from `AppState`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub identifier: String,
    pub message: String,
    pub bulk_text: String,
    /// Last user-facing status; `None` hides the status panel.
    pub status: Option<String>,
    pub sending: bool,
    pub queue: Vec<QueueRowView>,
    pub queue_len: usize,
    pub queue_heading: String,
    pub focus: Focus,
    pub selected: Option<usize>,
    pub can_add_single: bool,
    pub can_add_bulk: bool,
    pub can_send: bool,
    pub send_label: String,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRowView {
    pub position: usize,
    pub identifier: String,
    pub message: String,
}
