use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let key = model
        .last_key
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let cursor = model.buffer.cursor_visual();

    let status = format!(
        " KEY:{}  size:{} usable:{}  Ln {}, Col {}  Ctrl+Q:quit",
        key,
        model.buffer.len(),
        model.buffer.capacity(),
        cursor.row + 1,
        cursor.col + 1
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::White).fg(Color::Black));

    frame.render_widget(status_bar, area);
}
