// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Jotter
//!
//! A minimal terminal text buffer editor.
//!
//! Jotter holds one in-memory document and edits it from the keyboard:
//! - Growable byte storage that only ever grows in fixed increments
//! - A cursor kept as a single linear offset
//! - Row and column derived on demand, with tabs drawn four columns wide
//! - Word-wise movement and deletion, column-preserving vertical movement
//!
//! ## Architecture
//!
//! Jotter uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Editing actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Text store and cursor navigation
//! - [`app`]: Main application loop, key mapping and state
//! - [`ui`]: Terminal rendering
//! - [`config`]: Flag files and defaults
//! - [`perf`]: Timing and event debug log

pub mod app;
pub mod config;
pub mod editor;
pub mod perf;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{EditorBuffer, VisualPosition};
    pub use crate::ui::viewport::Viewport;
}
