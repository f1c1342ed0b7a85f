use crate::editor::{EditorBuffer, StoreError};
use crate::ui::STATUS_ROWS;
use crate::ui::viewport::Viewport;

use super::input::KeyReport;

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The document and its cursor
    pub buffer: EditorBuffer,
    /// Viewport over the document lines
    pub viewport: Viewport,
    /// Whether line numbers are drawn in the gutter
    pub line_numbers: bool,
    /// Last key received, shown in the status bar
    pub last_key: Option<KeyReport>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Error that ended the session, reported after the terminal is restored
    pub fatal_error: Option<StoreError>,
}

impl Model {
    /// Create a model for a terminal of `size` (width, height).
    pub fn new(buffer: EditorBuffer, size: (u16, u16)) -> Self {
        let (width, height) = size;
        let viewport = Viewport::new(
            width,
            height.saturating_sub(STATUS_ROWS),
            buffer.line_count(),
        );
        let mut model = Self {
            buffer,
            viewport,
            line_numbers: true,
            last_key: None,
            should_quit: false,
            fatal_error: None,
        };
        model.sync_viewport();
        model
    }

    pub const fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Scroll so the cursor row is on screen.
    pub(super) fn sync_viewport(&mut self) {
        self.viewport.set_total_lines(self.buffer.line_count());
        let row = self.buffer.cursor_visual().row;
        self.viewport.ensure_visible(row);
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorBuffer::new(), (80, 24))
    }
}
