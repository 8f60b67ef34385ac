//! Keyboard mapping.
//!
//! Disabled actions map to nothing, so the core never sees them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dm_core::{AppViewModel, Focus, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Dispatch(Msg),
    Quit,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<UiAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return Some(UiAction::Quit),
        KeyCode::Char('c') if ctrl => return Some(UiAction::Quit),
        KeyCode::Char('a') if ctrl => {
            return gated(view.can_add_single, Msg::AddSingleClicked);
        }
        KeyCode::Char('b') if ctrl => {
            return gated(view.can_add_bulk, Msg::AddBulkClicked);
        }
        KeyCode::Char('s') if ctrl => return gated(view.can_send, Msg::SendClicked),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::BackTab => return Some(UiAction::Dispatch(Msg::FocusPrevious)),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            return Some(UiAction::Dispatch(Msg::FocusPrevious));
        }
        KeyCode::Tab => return Some(UiAction::Dispatch(Msg::FocusNext)),
        _ => {}
    }

    match view.focus {
        Focus::Queue => map_queue_key(key.code, view),
        field => map_edit_key(key.code, field, view),
    }
}

fn gated(enabled: bool, msg: Msg) -> Option<UiAction> {
    enabled.then_some(UiAction::Dispatch(msg))
}

fn map_queue_key(code: KeyCode, view: &AppViewModel) -> Option<UiAction> {
    let msg = match code {
        KeyCode::Up | KeyCode::Char('k') => Msg::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Msg::SelectNext,
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => Msg::RemoveClicked {
            position: view.selected?,
        },
        _ => return None,
    };
    Some(UiAction::Dispatch(msg))
}

fn map_edit_key(code: KeyCode, field: Focus, view: &AppViewModel) -> Option<UiAction> {
    let current = match field {
        Focus::Identifier => &view.identifier,
        Focus::Message => &view.message,
        Focus::Bulk => &view.bulk_text,
        Focus::Queue => return None,
    };

    let mut text = current.clone();
    match code {
        KeyCode::Char(c) => text.push(c),
        KeyCode::Backspace => {
            text.pop()?;
        }
        // The identifier is a single line; Enter just moves on.
        KeyCode::Enter if field == Focus::Identifier => {
            return Some(UiAction::Dispatch(Msg::FocusNext));
        }
        KeyCode::Enter => text.push('\n'),
        _ => return None,
    }

    let msg = match field {
        Focus::Identifier => Msg::IdentifierChanged(text),
        Focus::Message => Msg::MessageChanged(text),
        Focus::Bulk => Msg::BulkTextChanged(text),
        Focus::Queue => return None,
    };
    Some(UiAction::Dispatch(msg))
}
