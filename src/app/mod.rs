//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible editing actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use input::{KeyReport, describe_key, message_for_key};
pub use model::Model;
pub use update::{Message, update};

use crate::editor::BufferConfig;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Clone)]
pub struct App {
    buffer_config: BufferConfig,
    line_numbers: bool,
}

impl App {
    /// Create an application with default buffer sizing.
    pub fn new() -> Self {
        Self {
            buffer_config: BufferConfig::default(),
            line_numbers: true,
        }
    }

    /// Set capacity, growth increment and tab size for the session buffer.
    pub const fn with_buffer_config(mut self, config: BufferConfig) -> Self {
        self.buffer_config = config;
        self
    }

    /// Show or hide line numbers in the gutter.
    pub const fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
