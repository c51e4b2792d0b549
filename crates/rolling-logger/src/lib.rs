//! Rolling Logger
//!
//! `tracing` subscriber that writes to stderr and to a size-rotated log
//! file, keeping the most recent lines in memory for display in the app.
//! `log` records are forwarded through tracing-subscriber's log bridge.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Rotation and buffer limits
#[derive(Debug, Clone, Copy)]
pub struct LoggerOptions {
    /// Rotate once the current file would grow past this size
    pub max_bytes: u64,
    /// Rotated files kept besides the current one. The current file is not
    /// counted, so `5` leaves up to six files on disk (`app.log` plus
    /// `app.1.log` through `app.5.log`).
    pub max_files: usize,
    /// Lines kept in memory
    pub buffer_lines: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            max_bytes: 1024 * 1024,
            max_files: 5,
            buffer_lines: 500,
        }
    }
}

struct Inner {
    dir: PathBuf,
    app_name: String,
    options: LoggerOptions,
    file: File,
    written: u64,
    buffer: VecDeque<String>,
    partial: String,
}

/// Cloneable handle to the rolling file and its line buffer
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

fn log_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.{}.log", app_name, index))
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl RollingWriter {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str, options: LoggerOptions) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let path = log_path(&dir, app_name, 0);
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                dir,
                app_name: app_name.to_string(),
                options,
                file,
                written,
                buffer: VecDeque::with_capacity(options.buffer_lines),
                partial: String::new(),
            })),
        })
    }

    /// Last `n` complete lines, oldest first
    pub fn recent_lines(&self, n: usize) -> Vec<String> {
        match self.inner.lock() {
            Ok(inner) => {
                let skip = inner.buffer.len().saturating_sub(n);
                inner.buffer.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        let inner = self.inner.lock().ok()?;
        Some(log_path(&inner.dir, &inner.app_name, 0))
    }
}

impl Inner {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let oldest = log_path(&self.dir, &self.app_name, self.options.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..self.options.max_files).rev() {
            let from = log_path(&self.dir, &self.app_name, index);
            if from.exists() {
                fs::rename(&from, log_path(&self.dir, &self.app_name, index + 1))?;
            }
        }
        self.file = open_append(&log_path(&self.dir, &self.app_name, 0))?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(end) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=end).collect();
            if self.buffer.len() == self.options.buffer_lines {
                self.buffer.pop_front();
            }
            self.buffer.push_back(line.trim_end().to_string());
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.options.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        if self.options.buffer_lines > 0 {
            self.remember(buf);
        }
        Ok(buf.len())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        inner.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

static WRITER: OnceLock<RollingWriter> = OnceLock::new();

/// Install the global subscriber with default options
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, LoggerOptions::default())
}

pub fn init_logger_with(log_dir: PathBuf, app_name: &str, options: LoggerOptions) -> Result<(), String> {
    let writer = RollingWriter::new(log_dir, app_name, options)
        .map_err(|e| format!("Failed to open log file: {}", e))?;

    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(level)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime)
                .with_ansi(false)
                .with_writer(writer.clone()),
        )
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTime).with_writer(io::stderr))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    WRITER
        .set(writer)
        .map_err(|_| "Logger already initialized".to_string())
}

fn ensure_init() -> Result<(), String> {
    if WRITER.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(message: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    ensure_init()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Last `n` lines written through the global logger
pub fn recent_lines(n: usize) -> Vec<String> {
    WRITER.get().map(|w| w.recent_lines(n)).unwrap_or_default()
}
