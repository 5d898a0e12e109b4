use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept in memory for the logs dialog
const MAX_BUFFERED_LOGS: usize = 1000;

/// Path of the installed file dispatch, set at most once per process
static FILE_DISPATCH: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application.
///
/// Every entry is kept in a bounded in-memory buffer for the logs dialog and
/// forwarded to the `log` facade. When file logging is enabled a `fern`
/// dispatch writes the facade output to the log file.
#[derive(Clone, Debug)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file: None,
        }
    }

    /// Create a logger, writing to the default log file when `enabled`.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_log_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Create a logger whose facade output goes to `path`.
    ///
    /// Only the first call in a process installs a dispatch; later calls
    /// report the file that is already in use.
    pub fn with_log_file(path: PathBuf) -> Result<Self> {
        let installed = install_file_dispatch(path)?;
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file: Some(installed),
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);
        self.buffer(message);
    }

    /// Add an entry to the in-memory buffer only
    pub fn buffer(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_BUFFERED_LOGS {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// File receiving the facade output, if file logging is active
    pub fn log_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Location of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(dir.join("refdesk").join("refdesk.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

fn install_file_dispatch(path: PathBuf) -> Result<PathBuf> {
    FILE_DISPATCH
        .get_or_try_init(|| {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            let dispatch = fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(log::LevelFilter::Debug)
                .chain(file);

            // Fails when another global logger is already set; the cell stays empty
            dispatch.apply().context("A global logger is already installed")?;

            Ok::<PathBuf, anyhow::Error>(path)
        })
        .cloned()
}
