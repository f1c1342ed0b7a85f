//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks which document lines are on screen and
//! scrolls just enough to keep the cursor row visible.

use std::ops::Range;

/// Manages the visible portion of a document.
///
/// The viewport tracks:
/// - Text area dimensions (width, height)
/// - Current scroll offset (in lines)
/// - Total document length
///
/// # Example
///
/// ```
/// use jotter::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 10, 100);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.ensure_visible(15);
/// assert_eq!(vp.visible_range(), 6..16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Rows available for document text
    /// * `total_lines` - Total lines in the document
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of lines in the document.
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines, clamped to the document.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll the minimum amount that puts `line` on screen.
    pub fn ensure_visible(&mut self, line: usize) {
        let height = self.height as usize;
        if height == 0 || line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of lines (e.g., after an edit).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Calculate the maximum valid offset.
    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
