// src/log.rs
// File sink for the `log` facade: `.store/debug.log`, one line per record,
// `[HH:MM:SS.mmm][LEVEL] message`, time measured from first use.

use std::fs::{ self, OpenOptions };
use std::io::Write;
use std::sync::{ Mutex, OnceLock };
use std::time::Instant;

use ::log::{ LevelFilter, Log, Metadata, Record, SetLoggerError };

use crate::config::consts::{ LOG_FILE, STORE_DIR };

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: FileLogger = FileLogger;

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn format_line(elapsed_ms: u128, level: &str, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

struct FileLogger;

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Keep reqwest/hyper chatter out of the file unless it's a warning.
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            || metadata.level() <= ::log::Level::Warn
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            start().elapsed().as_millis(),
            record.level().as_str(),
            &record.args().to_string(),
        );

        if let Ok(_guard) = LOG_LOCK.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Install the file logger. Call once per process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let _ = fs::create_dir_all(STORE_DIR);
    start();
    ::log::set_logger(&LOGGER)?;
    ::log::set_max_level(level);
    Ok(())
}
