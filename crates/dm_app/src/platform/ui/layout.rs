use dm_core::AppViewModel;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::NOTES;

pub struct ScreenAreas {
    pub header: Rect,
    pub status: Option<Rect>,
    pub identifier: Rect,
    pub message: Rect,
    pub bulk: Rect,
    pub actions: Rect,
    /// `None` while the queue is empty; the form then takes the full width.
    pub queue: Option<Rect>,
    pub notes: Rect,
    pub hints: Rect,
}

pub fn split(area: Rect, view: &AppViewModel) -> ScreenAreas {
    let has_status = view.status.is_some();
    let notes_height = NOTES.len() as u16 + 2;

    let mut rows = vec![Constraint::Length(3)];
    if has_status {
        rows.push(Constraint::Length(3));
    }
    rows.extend([
        Constraint::Min(12),
        Constraint::Length(notes_height),
        Constraint::Length(1),
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(area);

    let (status, body, notes, hints) = if has_status {
        (Some(rows[1]), rows[2], rows[3], rows[4])
    } else {
        (None, rows[1], rows[2], rows[3])
    };

    let (form, queue) = if view.queue_len > 0 {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(body);
        (columns[0], Some(columns[1]))
    } else {
        (body, None)
    };

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(form);

    ScreenAreas {
        header: rows[0],
        status,
        identifier: fields[0],
        message: fields[1],
        bulk: fields[2],
        actions: fields[3],
        queue,
        notes,
        hints,
    }
}
