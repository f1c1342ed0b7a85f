//! Jotter - A minimal terminal text buffer editor.
//!
//! # Usage
//!
//! ```bash
//! jotter
//! jotter --tab-size 8
//! jotter --capacity 200 --growth 100 --save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jotter::app::App;
use jotter::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use jotter::perf;

/// A minimal terminal text buffer editor
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
struct Cli {
    /// Columns a tab occupies on screen
    #[arg(long, value_name = "N", value_parser = parse_positive)]
    tab_size: Option<usize>,

    /// Initial text buffer capacity in bytes
    #[arg(long, value_name = "N", value_parser = parse_positive)]
    capacity: Option<usize>,

    /// Bytes added to the text buffer each time it fills up
    #[arg(long, value_name = "N", value_parser = parse_positive)]
    growth: Option<usize>,

    /// Hide line numbers in the gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Enable startup performance logging
    #[arg(long)]
    perf: bool,

    /// Write every dispatched message and frame to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "effective configuration");

    perf::set_timings(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("JOTTER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_trace_path(debug_log_path.as_deref()) {
        tracing::warn!(
            path = %debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            %err,
            "failed to initialize debug log"
        );
    }

    let mut app = App::new()
        .with_buffer_config(effective.buffer_config())
        .with_line_numbers(!effective.no_line_numbers);

    app.run().context("Application error")
}
