use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, ErrorKind, Write};
use std::sync::Mutex;

// Global static logger instance
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Initializes the global logger to write to the specified file path.
/// The file is created if it doesn't exist and truncated if it does, so each
/// run starts with a fresh log.
pub fn init_global_logger(log_file_path: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;
    let writer = BufWriter::new(file);
    let mut logger_guard = LOGGER.lock().expect("Logger mutex poisoned");
    *logger_guard = Some(writer);
    Ok(())
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}", args).is_err() {
                // Fallback to stderr if log writing fails
                eprintln!("Fallback (log write failed): {}", args);
            }
        }
        // If logger is None (not initialized), verbose messages are suppressed.
    } else {
        // Mutex was poisoned, highly unlikely but good to acknowledge.
        eprintln!("Fallback (logger mutex error): {}", args);
    }
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "ERROR: {}", args).is_err() {
                eprintln!("Fallback (log write failed) ERROR: {}", args);
            }
        }
        // If logger is None, verbose errors are also suppressed from the log file.
    } else {
        eprintln!("Fallback (logger mutex error) ERROR: {}", args);
    }
}

/// Flushes any buffered log output to disk.
pub fn flush_global_logger() -> Result<(), IoError> {
    let mut logger_guard = LOGGER
        .lock()
        .map_err(|_| IoError::new(ErrorKind::Other, "logger mutex poisoned"))?;
    if let Some(writer) = logger_guard.as_mut() {
        writer.flush()?;
    }
    Ok(())
}
