#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the single-recipient identifier field.
    IdentifierChanged(String),
    /// User edited the message body (shared by single and bulk add).
    MessageChanged(String),
    /// User edited the bulk identifiers field (one per line).
    BulkTextChanged(String),
    /// User triggered "Add to Queue".
    AddSingleClicked,
    /// User triggered "Add Bulk Recipients".
    AddBulkClicked,
    /// User removed the queue entry at `position`.
    RemoveClicked { position: usize },
    /// User triggered "Send".
    SendClicked,
    /// Move keyboard focus to the next form area.
    FocusNext,
    /// Move keyboard focus to the previous form area.
    FocusPrevious,
    /// Move the queue selection down one row.
    SelectNext,
    /// Move the queue selection up one row.
    SelectPrevious,
    /// Engine finished one entry of a send sequence.
    SendProgress {
        run_id: crate::RunId,
        completed: usize,
        total: usize,
        identifier: String,
    },
    /// Engine finished a whole send sequence.
    SendFinished { run_id: crate::RunId, sent: usize },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
