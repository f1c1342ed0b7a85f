use super::*;
use crate::app::{KeyReport, Message, Model, update};
use crate::editor::EditorBuffer;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;

fn draw(model: &Model, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, row)].symbol())
        .collect()
}

fn model_with(text: &str, position: usize, size: (u16, u16)) -> Model {
    let mut buf = EditorBuffer::from_text(text);
    buf.set_position(position);
    // Every update re-syncs the viewport to the cursor.
    let model = Model::new(buf, size);
    update(model, Message::Resize(size.0, size.1))
}

#[test]
fn test_empty_document_shows_one_numbered_line_and_tildes() {
    let model = Model::new(EditorBuffer::new(), (40, 10));
    let terminal = draw(&model, 40, 10);

    assert!(row_text(&terminal, 0).starts_with("1  "));
    for row in 1..8 {
        assert!(
            row_text(&terminal, row).starts_with('~'),
            "row {row} should be a filler row"
        );
    }
    let status = row_text(&terminal, 8);
    assert!(status.contains("size:0 usable:50"), "status was {status:?}");
    assert!(row_text(&terminal, 9).trim().is_empty());
}

#[test]
fn test_text_is_drawn_after_gutter_with_tabs_expanded() {
    let model = model_with("a\tb\nxyz", 0, (40, 10));
    let terminal = draw(&model, 40, 10);

    assert!(row_text(&terminal, 0).starts_with("1  a    b"));
    assert!(row_text(&terminal, 1).starts_with("2  xyz"));
    assert!(row_text(&terminal, 2).starts_with('~'));
}

#[test]
fn test_cursor_is_placed_at_visual_position() {
    let model = model_with("ab\n\tc", 5, (40, 10));
    let mut terminal = draw(&model, 40, 10);

    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(8, 1));
}

#[test]
fn test_line_numbers_can_be_hidden() {
    let model = model_with("hello", 0, (40, 10)).with_line_numbers(false);
    let terminal = draw(&model, 40, 10);

    assert!(row_text(&terminal, 0).starts_with("   hello"));
}

#[test]
fn test_view_scrolls_to_keep_cursor_visible() {
    let text = (1..=30)
        .map(|i| format!("line{i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let len = text.len();
    let model = model_with(&text, len, (40, 10));
    assert_eq!(model.viewport.offset(), 22);

    let mut terminal = draw(&model, 40, 10);
    assert!(row_text(&terminal, 0).starts_with("23 line23"));
    assert!(row_text(&terminal, 7).starts_with("30 line30"));
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(9, 7));
}

#[test]
fn test_status_bar_reports_last_key_and_cursor() {
    let mut model = model_with("ab\ncd", 4, (60, 10));
    model.last_key = Some(KeyReport {
        name: "a".to_string(),
        code: Some(97),
    });
    let terminal = draw(&model, 60, 10);

    let status = row_text(&terminal, 8);
    assert!(status.contains("KEY:a [97]"), "status was {status:?}");
    assert!(status.contains("size:5 usable:50"), "status was {status:?}");
    assert!(status.contains("Ln 2, Col 2"), "status was {status:?}");
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let model = model_with("abc", 3, (5, 1));
    let _ = draw(&model, 5, 1);
}

#[test]
fn test_gutter_width_grows_with_line_count() {
    assert_eq!(gutter_width(1), MIN_GUTTER_WIDTH);
    assert_eq!(gutter_width(99), MIN_GUTTER_WIDTH);
    assert_eq!(gutter_width(100), 4);
    assert_eq!(gutter_width(12_345), 6);
}

#[test]
fn test_expand_tabs() {
    assert_eq!(expand_tabs(b"a\tb", 4), "a    b");
    assert_eq!(expand_tabs(b"\t", 2), "  ");
    assert_eq!(expand_tabs(b"", 4), "");
}
