use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message};
use crate::editor::is_insertable;
use crate::perf::TraceKind;

/// Name and code of a key press, for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub name: String,
    pub code: Option<u32>,
}

impl std::fmt::Display for KeyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} [{code}]", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl App {
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if is_press(key) => message_for_key(key),
            Event::Resize(w, h) => {
                crate::perf::record(TraceKind::Resize, format!("width={w} height={h}"));
                Some(Message::Resize(*w, *h))
            }
            _ => None,
        }
    }
}

pub(super) fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Map a key press to an editing action.
///
/// Printable characters outside the insertable set map to `None` and are
/// dropped.
pub fn message_for_key(key: &KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q' | 'Q') if ctrl => Some(Message::Quit),
        // Terminals report Ctrl+Backspace as Ctrl+H or as Backspace with a modifier.
        KeyCode::Char('w' | 'h') if ctrl => Some(Message::DeleteWordBefore),
        KeyCode::Backspace if ctrl || alt => Some(Message::DeleteWordBefore),
        KeyCode::Backspace => Some(Message::DeleteBefore),
        KeyCode::Delete => Some(Message::DeleteAfter),
        KeyCode::Left if ctrl => Some(Message::MoveWordLeft),
        KeyCode::Right if ctrl => Some(Message::MoveWordRight),
        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Up => Some(Message::MoveUp),
        KeyCode::Down => Some(Message::MoveDown),
        KeyCode::Enter => Some(Message::Insert(b'\n')),
        KeyCode::Tab => Some(Message::Insert(b'\t')),
        KeyCode::Char(c) if !ctrl && !alt => is_insertable(c).map(Message::Insert),
        _ => None,
    }
}

/// Describe a key press the way the status bar shows it.
pub fn describe_key(key: &KeyEvent) -> KeyReport {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => {
            let upper = c.to_ascii_uppercase();
            KeyReport {
                name: format!("^{upper}"),
                code: upper.is_ascii_uppercase().then_some(u32::from(upper) & 0x1f),
            }
        }
        KeyCode::Char(' ') => KeyReport {
            name: "Space".to_string(),
            code: Some(32),
        },
        KeyCode::Char(c) => KeyReport {
            name: c.to_string(),
            code: Some(u32::from(c)),
        },
        KeyCode::Enter => named("Enter", Some(10)),
        KeyCode::Tab => named("Tab", Some(9)),
        KeyCode::Backspace => named("Backspace", Some(127)),
        KeyCode::Esc => named("Esc", Some(27)),
        code => KeyReport {
            name: if ctrl {
                format!("C-{code:?}")
            } else {
                format!("{code:?}")
            },
            code: None,
        },
    }
}

fn named(name: &str, code: Option<u32>) -> KeyReport {
    KeyReport {
        name: name.to_string(),
        code,
    }
}
