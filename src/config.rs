use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{BufferConfig, DEFAULT_CAPACITY, GROWTH_INCREMENT, TAB_SIZE};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_line_numbers: bool,
    pub perf: bool,
    pub tab_size: Option<usize>,
    pub capacity: Option<usize>,
    pub growth: Option<usize>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_line_numbers: self.no_line_numbers || other.no_line_numbers,
            perf: self.perf || other.perf,
            tab_size: other.tab_size.or(self.tab_size),
            capacity: other.capacity.or(self.capacity),
            growth: other.growth.or(self.growth),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    /// Buffer sizing with defaults filled in.
    pub fn buffer_config(&self) -> BufferConfig {
        BufferConfig {
            capacity: self.capacity.unwrap_or(DEFAULT_CAPACITY),
            increment: self.growth.unwrap_or(GROWTH_INCREMENT),
            tab_size: self.tab_size.unwrap_or(TAB_SIZE),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("jotter").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("jotter")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("jotter").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("jotter").join("config");
        }
    }

    PathBuf::from(".jotterrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".jotterrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# jotter defaults (saved with --save)".to_string());
    if flags.no_line_numbers {
        lines.push("--no-line-numbers".to_string());
    }
    if let Some(n) = flags.tab_size {
        lines.push(format!("--tab-size {n}"));
    }
    if let Some(n) = flags.capacity {
        lines.push(format!("--capacity {n}"));
    }
    if let Some(n) = flags.growth {
        lines.push(format!("--growth {n}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--no-line-numbers" {
            flags.no_line_numbers = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if token == "--debug-log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.debug_log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--debug-log=") {
            flags.debug_log = Some(PathBuf::from(value));
        } else if let Some((name, inline)) = split_size_flag(token) {
            let value = match inline {
                Some(v) => Some(v),
                None => {
                    i += 1;
                    tokens.get(i).map(String::as_str)
                }
            };
            let parsed = value.and_then(parse_size);
            match name {
                "--tab-size" => flags.tab_size = parsed.or(flags.tab_size),
                "--capacity" => flags.capacity = parsed.or(flags.capacity),
                _ => flags.growth = parsed.or(flags.growth),
            }
        }
        i += 1;
    }
    flags
}

/// Recognise `--tab-size`, `--capacity` and `--growth`, with or without an
/// inline `=value`.
fn split_size_flag(token: &str) -> Option<(&'static str, Option<&str>)> {
    ["--tab-size", "--capacity", "--growth"]
        .into_iter()
        .find_map(|name| {
            let rest = token.strip_prefix(name)?;
            if rest.is_empty() {
                Some((name, None))
            } else {
                rest.strip_prefix('=').map(|v| (name, Some(v)))
            }
        })
}

/// Sizes must be positive; anything else keeps the default.
fn parse_size(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|&n| n > 0)
}
