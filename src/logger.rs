use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

pub const DEFAULT_LOG_FILE: &str = "indic_flashcards.log";

/// Opens `path` for appending. Later calls are no-ops once a file is open.
pub fn init(path: &Path) -> std::io::Result<()> {
    let Ok(mut logger) = LOGGER.lock() else {
        return Ok(());
    };
    if logger.is_none() {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *logger = Some(file);
    }
    Ok(())
}

pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(logger) = guard.as_mut()
    {
        let _ = write_line(logger, message);
    }
}

fn write_line<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
    writeln!(out, "[{}] {}", timestamp, message)
}
