use super::store::{StoreError, TextStore};
use super::{DEFAULT_CAPACITY, GROWTH_INCREMENT, TAB_SIZE};

/// Row and column of the cursor as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualPosition {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based screen column, with tabs expanded.
    pub col: usize,
}

impl VisualPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Sizing knobs for a new [`EditorBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Initial store capacity in bytes.
    pub capacity: usize,
    /// Bytes added on each store growth.
    pub increment: usize,
    /// Screen columns per tab.
    pub tab_size: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            increment: GROWTH_INCREMENT,
            tab_size: TAB_SIZE,
        }
    }
}

/// The document text together with its cursor.
///
/// The cursor is the number of bytes before it. Every operation keeps it
/// within `0..=len()`; operations at a boundary do nothing rather than
/// failing.
#[derive(Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    store: TextStore,
    position: usize,
    tab_size: usize,
}

impl EditorBuffer {
    /// Create an empty buffer with default sizing.
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Create an empty buffer.
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            store: TextStore::new(config.capacity, config.increment),
            position: 0,
            tab_size: config.tab_size.max(1),
        }
    }

    /// Create a buffer holding `text` with the cursor at offset 0.
    pub fn from_text(text: &str) -> Self {
        let config = BufferConfig::default();
        Self {
            store: TextStore::from_bytes(text.as_bytes(), config.capacity, config.increment),
            position: 0,
            tab_size: config.tab_size,
        }
    }

    /// Cursor offset.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes in the document.
    pub const fn len(&self) -> usize {
        self.store.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Logical store capacity.
    pub const fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub const fn tab_size(&self) -> usize {
        self.tab_size
    }

    pub const fn store(&self) -> &TextStore {
        &self.store
    }

    pub fn char_at(&self, offset: usize) -> Option<u8> {
        self.store.char_at(offset)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.store.as_bytes()
    }

    /// The document as text. Only ASCII reaches the store through the
    /// input filter; anything else is shown lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.store.as_bytes()).into_owned()
    }

    /// Number of newline-separated lines (at least one).
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// The document split at newlines, newlines excluded.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.store.as_bytes().split(|&b| b == b'\n')
    }

    /// Move the cursor to `offset`, clamped to the document.
    pub fn set_position(&mut self, offset: usize) {
        self.position = offset.min(self.store.len());
    }

    /// True when `offset` is inside the document and not at the start of a
    /// line. Offset 0 is never interior; the end of the document is
    /// interior unless it follows a newline.
    pub fn is_interior_non_newline(&self, offset: usize) -> bool {
        offset > 0 && offset <= self.store.len() && !self.store.is_newline(offset - 1)
    }

    /// Screen row and column of the cursor.
    ///
    /// Tabs advance the column by the tab size; everything else by one.
    pub fn cursor_visual(&self) -> VisualPosition {
        let mut pos = VisualPosition::default();
        for &b in &self.store.as_bytes()[..self.position] {
            match b {
                b'\n' => {
                    pos.row += 1;
                    pos.col = 0;
                }
                b'\t' => pos.col += self.tab_size,
                _ => pos.col += 1,
            }
        }
        pos
    }

    // --- Editing ---

    /// Insert a byte at the cursor and step past it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Allocation`] if the store needed to grow and
    /// could not. Neither the text nor the cursor changes in that case.
    pub fn insert(&mut self, byte: u8) -> Result<(), StoreError> {
        self.store.insert_at(self.position, byte)?;
        self.position += 1;
        Ok(())
    }

    /// Delete the byte before the cursor (Backspace).
    ///
    /// Returns `true` if a byte was deleted.
    pub fn delete_before(&mut self) -> bool {
        if self.position == 0 || !self.store.delete_at(self.position - 1) {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Delete the byte under the cursor (Delete).
    ///
    /// Returns `true` if a byte was deleted.
    pub fn delete_after(&mut self) -> bool {
        self.store.delete_at(self.position)
    }

    /// Delete back to the start of the current word (Ctrl+Backspace).
    ///
    /// A space or newline directly before the cursor is deleted on its own.
    /// Otherwise the run of word bytes before the cursor is removed, leaving
    /// the whitespace in front of it.
    pub fn delete_word_before(&mut self) {
        if self.position == 0 {
            return;
        }
        if self.is_word_break(self.position - 1) {
            self.delete_before();
            return;
        }
        while self.position > 0
            && !self.store.is_empty()
            && !self.is_word_break(self.position - 1)
        {
            self.delete_before();
        }
    }

    // --- Horizontal movement ---

    pub const fn move_left(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.position < self.store.len() {
            self.position += 1;
        }
    }

    /// Move to the start of the word before the cursor (Ctrl+Left).
    ///
    /// A newline before the cursor is crossed on its own. A single space is
    /// stepped over before skipping the word in front of it.
    pub fn move_word_left(&mut self) {
        if self.position == 0 {
            return;
        }
        if self.store.is_newline(self.position - 1) {
            self.position -= 1;
            return;
        }
        if self.store.is_space(self.position - 1) {
            self.position -= 1;
        }
        while self.is_interior_non_newline(self.position)
            && !self.store.is_space(self.position - 1)
        {
            self.position -= 1;
        }
    }

    /// Move to the end of the word under the cursor (Ctrl+Right).
    ///
    /// On a space or newline the cursor steps over just that byte.
    pub fn move_word_right(&mut self) {
        let len = self.store.len();
        if self.position >= len {
            return;
        }
        if self.is_word_break(self.position) {
            self.position += 1;
            return;
        }
        while self.position < len && !self.is_word_break(self.position) {
            self.position += 1;
        }
    }

    // --- Vertical movement ---

    /// Move to the same column on the next line.
    ///
    /// The column is counted in bytes, so a tab counts as one step here even
    /// though it is drawn wider. A shorter next line leaves the cursor at its
    /// end; on the last line the cursor goes to the end of the document.
    pub fn move_down(&mut self) {
        let len = self.store.len();
        if self.position >= len {
            return;
        }
        let (line_start, distance) = self.line_start_and_distance();
        let mut next = line_start;
        while next < len && !self.store.is_newline(next) {
            next += 1;
        }
        if next >= len {
            self.position = len;
            return;
        }
        self.position = self.advance_within_line(next + 1, distance);
    }

    /// Move to the same column on the previous line.
    ///
    /// Mirrors [`Self::move_down`]; on the first line the cursor goes to the
    /// start of the document.
    pub fn move_up(&mut self) {
        if self.position == 0 {
            return;
        }
        let (line_start, distance) = self.line_start_and_distance();
        if line_start == 0 {
            self.position = 0;
            return;
        }
        let mut prev = line_start - 1;
        while self.is_interior_non_newline(prev) {
            prev -= 1;
        }
        self.position = self.advance_within_line(prev, distance);
    }

    // --- Private helpers ---

    fn is_word_break(&self, offset: usize) -> bool {
        self.store.is_space(offset) || self.store.is_newline(offset)
    }

    /// Walk back to the start of the cursor's line, counting the steps.
    fn line_start_and_distance(&self) -> (usize, usize) {
        let mut offset = self.position;
        let mut distance = 0;
        while self.is_interior_non_newline(offset) {
            offset -= 1;
            distance += 1;
        }
        (offset, distance)
    }

    /// Step forward from `offset` up to `steps` times without crossing a
    /// newline or the end of the document.
    fn advance_within_line(&self, mut offset: usize, steps: usize) -> usize {
        for _ in 0..steps {
            if !self.is_interior_non_newline(offset + 1) {
                break;
            }
            offset += 1;
        }
        offset.min(self.store.len())
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("store", &self.store)
            .field("position", &self.position)
            .field("tab_size", &self.tab_size)
            .finish()
    }
}
