use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};
use crate::editor::EditorBuffer;
use crate::perf::TraceKind;

use super::input::{describe_key, is_press};

impl App {
    /// Run the main event loop.
    ///
    /// The terminal is restored before returning, on success and on error.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or I/O fails, or if the
    /// text buffer could not grow.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - jotter requires an interactive terminal")?;
        drop(init_scope);

        let result = terminal
            .size()
            .context("Failed to query terminal size")
            .and_then(|size| {
                let buffer = EditorBuffer::with_config(self.buffer_config);
                let mut model = Model::new(buffer, (size.width, size.height))
                    .with_line_numbers(self.line_numbers);
                Self::event_loop(&mut terminal, &mut model)?;
                match model.fatal_error.take() {
                    Some(err) => Err(anyhow::Error::new(err).context("Editing session aborted")),
                    None => Ok(()),
                }
            });

        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;

        loop {
            frame_idx += 1;
            let draw_start = Instant::now();
            terminal.draw(|frame| crate::ui::render(model, frame))?;
            crate::perf::record(
                TraceKind::Frame,
                format!(
                    "frame={} draw_ms={:.3} len={} capacity={} position={}",
                    frame_idx,
                    draw_start.elapsed().as_secs_f64() * 1000.0,
                    model.buffer.len(),
                    model.buffer.capacity(),
                    model.buffer.position()
                ),
            );

            if model.should_quit {
                break;
            }

            // One event, one action, one render.
            let event = event::read()?;
            if let Event::Key(key) = &event
                && is_press(key)
            {
                model.last_key = Some(describe_key(key));
            }
            if let Some(msg) = Self::handle_event(&event) {
                crate::perf::record(TraceKind::Message, format!("frame={frame_idx} msg={msg:?}"));
                *model = update(std::mem::take(model), msg);
            }
        }
        Ok(())
    }
}
