use dm_core::{AppViewModel, Focus, QueueRowView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::constants::*;
use super::layout::{self, ScreenAreas};

const ACCENT: Color = Color::Magenta;
const MUTED: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let ScreenAreas {
        header,
        status,
        identifier,
        message,
        bulk,
        actions,
        queue,
        notes,
        hints,
    } = layout::split(frame.area(), view);

    render_header(frame, header);
    if let (Some(area), Some(text)) = (status, view.status.as_deref()) {
        render_status(frame, area, text);
    }
    render_input(
        frame,
        identifier,
        LABEL_IDENTIFIER,
        &view.identifier,
        view.focus == Focus::Identifier,
    );
    render_input(
        frame,
        message,
        LABEL_MESSAGE,
        &view.message,
        view.focus == Focus::Message,
    );
    render_input(frame, bulk, LABEL_BULK, &view.bulk_text, view.focus == Focus::Bulk);
    render_actions(frame, actions, view);
    if let Some(area) = queue {
        render_queue(frame, area, view);
    }
    render_notes(frame, notes);
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(MUTED)),
        hints,
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(APP_SUBTITLE, Style::default().fg(MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(ACCENT))
        .title(LABEL_STATUS);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(label);

    let mut text = Text::raw(value.to_string());
    if focused {
        let cursor = Span::styled("▏", Style::default().fg(ACCENT));
        match text.lines.last_mut() {
            Some(line) if !value.ends_with('\n') => line.push_span(cursor),
            _ => text.lines.push(Line::from(cursor)),
        }
    }

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_actions(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = Line::from(vec![
        button(BUTTON_ADD_SINGLE, view.can_add_single),
        Span::raw("  "),
        button(BUTTON_ADD_BULK, view.can_add_bulk),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_queue(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if view.focus == Focus::Queue {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        })
        .title(view.queue_heading.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = view.queue.iter().map(queue_item).collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(view.selected);
    frame.render_stateful_widget(list, parts[0], &mut list_state);

    let send = Line::from(button(
        &format!("{SEND_SHORTCUT} {}", view.send_label),
        view.can_send,
    ))
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(send), parts[1]);
}

fn queue_item(row: &QueueRowView) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        format!("@{}", row.identifier),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(row.message.lines().map(|line| {
        Line::from(Span::styled(
            format!("  {line}"),
            Style::default().fg(Color::Gray),
        ))
    }));
    ListItem::new(lines)
}

fn render_notes(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = NOTES.iter().map(|note| Line::from(format!("• {note}"))).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(LABEL_NOTES);
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Yellow))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// A pseudo-button: bracketed label, dimmed when disabled.
fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    Span::styled(format!("[ {label} ]"), style)
}
