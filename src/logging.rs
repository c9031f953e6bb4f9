//! JSON-lines file logger.
//!
//! The terminal owns stdout while the game runs, so log records go to an
//! append-mode file instead, one JSON object per line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogLine<'a> {
    pub ts_ms: u64,
    pub level: &'a str,
    pub target: &'a str,
    pub msg: String,
}

impl<'a> LogLine<'a> {
    pub fn from_record(record: &'a Record<'_>) -> Self {
        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            ts_ms,
            level: record.level().as_str(),
            target: record.target(),
            msg: record.args().to_string(),
        }
    }
}

/// `log::Log` implementation writing [`LogLine`]s to any writer.
pub struct JsonLinesLogger<W: Write + Send> {
    level: LevelFilter,
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesLogger<W> {
    pub fn new(out: W, level: LevelFilter) -> Self {
        Self {
            level,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Log for JsonLinesLogger<W> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine::from_record(record);
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if serde_json::to_writer(&mut *out, &line).is_err() {
            return;
        }
        let _ = out.write_all(b"\n");
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Install the file logger when `path` is set. Without a path logging stays
/// off and every `log::*!` call is a cheap no-op.
pub fn init(path: Option<&str>, level: LevelFilter) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("logging: open {}", path))?;
    let logger: JsonLinesLogger<BufWriter<File>> = JsonLinesLogger::new(BufWriter::new(file), level);
    log::set_boxed_logger(Box::new(logger)).context("logging: logger already installed")?;
    log::set_max_level(level);
    Ok(true)
}
