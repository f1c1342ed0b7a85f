use crate::app::Model;
use crate::ui::STATUS_ROWS;

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a byte at the cursor
    Insert(u8),
    /// Delete the byte before the cursor
    DeleteBefore,
    /// Delete the byte under the cursor
    DeleteAfter,
    /// Delete back to the start of the word
    DeleteWordBefore,

    // Navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveWordLeft,
    MoveWordRight,

    // Window
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Insert(byte) => {
            if let Err(err) = model.buffer.insert(byte) {
                tracing::error!(%err, "insert failed, ending session");
                model.fatal_error = Some(err);
                model.should_quit = true;
            }
        }
        Message::DeleteBefore => {
            model.buffer.delete_before();
        }
        Message::DeleteAfter => {
            model.buffer.delete_after();
        }
        Message::DeleteWordBefore => model.buffer.delete_word_before(),
        Message::MoveLeft => model.buffer.move_left(),
        Message::MoveRight => model.buffer.move_right(),
        Message::MoveUp => model.buffer.move_up(),
        Message::MoveDown => model.buffer.move_down(),
        Message::MoveWordLeft => model.buffer.move_word_left(),
        Message::MoveWordRight => model.buffer.move_word_right(),
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, height.saturating_sub(STATUS_ROWS));
        }
        Message::Quit => model.should_quit = true,
    }
    model.sync_viewport();
    model
}
