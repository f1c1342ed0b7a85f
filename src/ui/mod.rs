//! Terminal UI components.
//!
//! - [`viewport`]: Scroll position and visible range management
//! - [`render`]: Draws the text, gutter, `~` filler rows and status bar

pub mod viewport;

mod render;
mod status;

pub use render::{expand_tabs, gutter_width, render};

/// Rows below the text: the status bar and one spare line.
pub const STATUS_ROWS: u16 = 2;
/// Narrowest gutter; numbers up to 99 leave a space before the text.
pub const MIN_GUTTER_WIDTH: u16 = 3;

#[cfg(test)]
mod tests;
