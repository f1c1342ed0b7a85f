//! Text buffer engine.
//!
//! A growable byte store plus a cursor kept as a single linear offset.
//! Row and column are derived from the offset on demand, never stored,
//! so edits anywhere in the text cannot leave them stale.

mod buffer;
mod store;

pub use buffer::{BufferConfig, EditorBuffer, VisualPosition};
pub use store::{StoreError, TextStore};

/// Columns a tab occupies on screen.
pub const TAB_SIZE: usize = 4;
/// Store capacity at session start.
pub const DEFAULT_CAPACITY: usize = 50;
/// Bytes added to the store each time it fills up.
pub const GROWTH_INCREMENT: usize = 50;

const PUNCTUATION: &[u8] = b"!\"$%^&*()-_=+[]{};:@'~#,<.>/?\\|";

/// Map a typed character to the byte stored in the buffer.
///
/// Only space, tab, newline, ASCII letters and digits, and a fixed set of
/// punctuation are accepted. Everything else yields `None` and should be
/// dropped by the caller.
pub fn is_insertable(ch: char) -> Option<u8> {
    let byte = u8::try_from(ch).ok()?;
    let allowed = matches!(byte, b' ' | b'\t' | b'\n')
        || byte.is_ascii_alphanumeric()
        || PUNCTUATION.contains(&byte);
    allowed.then_some(byte)
}
