//! Global file logger for debug output.
//!
//! Writes timestamped lines to `~/.folio/debug.log`. Logging is
//! best-effort: calls before initialization or after a write failure
//! are silently dropped, and nothing here ever surfaces an error to
//! the caller's control flow.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use lazy_static::lazy_static;

use crate::FolioResult;

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

fn log_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".folio").join("debug.log"))
}

/// Opens the log file in append mode, creating `~/.folio` as needed.
/// Call once at startup; callers typically ignore the result.
pub fn init_global_logger() -> FolioResult<()> {
    let path = log_path().ok_or_else(|| anyhow::anyhow!("no home directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    info("logger initialized");
    Ok(())
}

fn write_line(level: &str, msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{stamp}] [{level}] {msg}");
        }
    }
}

pub fn debug(msg: &str) {
    write_line("DEBUG", msg);
}

pub fn info(msg: &str) {
    write_line("INFO", msg);
}

pub fn warn(msg: &str) {
    write_line("WARN", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_before_init_is_a_noop() {
        // Must not panic or create files as a side effect.
        debug("dropped");
        warn("also dropped");
    }
}
