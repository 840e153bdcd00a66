//! Logger setup: timestamped records to stderr, teed best-effort into a log
//! file. Constructed once at startup rather than left to ambient defaults.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::info;

/// Writes every log record to stderr and, when available, to the log file.
/// File write errors are swallowed; the console copy always goes through.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(file) = &mut self.file {
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = &mut self.file {
            let _ = file.flush();
        }
        Ok(())
    }
}

/// Initialize the global logger. A log file that cannot be opened degrades
/// to console-only logging with a warning, never an abort.
pub fn init(log_file: &Path) {
    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "Warning: cannot write to log file {}: {e}. Logging to console only.",
                log_file.display()
            );
            None
        }
    };

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .init();

    info!("logging setup complete");
}
