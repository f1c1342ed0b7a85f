use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::{MIN_GUTTER_WIDTH, STATUS_ROWS, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let text_height = area.height.saturating_sub(STATUS_ROWS);
    let text_area = Rect {
        height: text_height,
        ..area
    };
    let status_area = Rect {
        y: area.y + text_height,
        height: (area.height - text_height).min(1),
        ..area
    };

    render_text(model, frame, text_area);
    status::render_status_bar(model, frame, status_area);
    place_cursor(model, frame, text_area);
}

fn render_text(model: &Model, frame: &mut Frame, area: Rect) {
    let gutter = usize::from(gutter_width(model.buffer.line_count()));
    let tab_size = model.buffer.tab_size();
    let range = model.viewport.visible_range();
    let rows = usize::from(area.height);

    let mut content: Vec<Line> = model
        .buffer
        .lines()
        .enumerate()
        .skip(range.start)
        .take(range.len().min(rows))
        .map(|(idx, text)| {
            let number = if model.line_numbers {
                format!("{:<gutter$}", idx + 1)
            } else {
                " ".repeat(gutter)
            };
            Line::from(vec![
                Span::styled(number, Style::default().fg(Color::Green)),
                Span::raw(expand_tabs(text, tab_size)),
            ])
        })
        .collect();

    while content.len() < rows {
        content.push(Line::from(Span::styled(
            "~",
            Style::default().fg(Color::Cyan),
        )));
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn place_cursor(model: &Model, frame: &mut Frame, area: Rect) {
    let visual = model.buffer.cursor_visual();
    let Some(row) = visual.row.checked_sub(model.viewport.offset()) else {
        return;
    };
    let Ok(row) = u16::try_from(row) else {
        return;
    };
    if row >= area.height || area.width == 0 {
        return;
    }
    let gutter = gutter_width(model.buffer.line_count());
    let col = u16::try_from(visual.col).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(gutter)
        .saturating_add(col)
        .min(area.right() - 1);
    frame.set_cursor_position((x, area.y + row));
}

/// Draw a line with each tab widened to `tab_size` spaces.
pub fn expand_tabs(line: &[u8], tab_size: usize) -> String {
    let mut out = String::with_capacity(line.len());
    for &b in line {
        if b == b'\t' {
            out.extend(std::iter::repeat_n(' ', tab_size));
        } else {
            out.push(char::from(b));
        }
    }
    out
}

/// Calculate the gutter width for line numbers, one column wider than the
/// largest number.
pub const fn gutter_width(total_lines: usize) -> u16 {
    let digits = if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    };
    if digits + 1 > MIN_GUTTER_WIDTH {
        digits + 1
    } else {
        MIN_GUTTER_WIDTH
    }
}
