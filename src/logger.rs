use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use walkdir::WalkDir;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogLevel {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    pub context: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub timestamp: String,
    pub summary: ReportSummary,
    pub entries: Vec<LogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub errors: usize,
    pub warnings: usize,
    pub processed: ProcessingStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub words_in: usize,
    pub words_out: usize,
    pub steps: usize,
}

/// JSONL run log. Clones share the same file and counters.
#[derive(Clone)]
pub struct DiagnosticLogger {
    log_dir: PathBuf,
    log_file: Arc<Mutex<Option<BufWriter<File>>>>,
    run_id: String,
    entries: Arc<Mutex<Vec<LogEntry>>>,
    error_count: Arc<Mutex<usize>>,
    warning_count: Arc<Mutex<usize>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl DiagnosticLogger {
    pub fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

        let run_id = Utc::now().format("%Y%m%d-%H%M%S-%3f").to_string();
        let log_file_path = log_dir.join(format!("run-{}.jsonl", run_id));

        let log_file = Some(BufWriter::new(
            File::create(&log_file_path)
                .with_context(|| format!("Failed to create log file: {:?}", log_file_path))?,
        ));

        Ok(DiagnosticLogger {
            log_dir: log_dir.to_path_buf(),
            log_file: Arc::new(Mutex::new(log_file)),
            run_id,
            entries: Arc::new(Mutex::new(Vec::new())),
            error_count: Arc::new(Mutex::new(0)),
            warning_count: Arc::new(Mutex::new(0)),
        })
    }

    /// A logger that keeps entries in memory only.
    pub fn in_memory() -> Self {
        DiagnosticLogger {
            log_dir: PathBuf::new(),
            log_file: Arc::new(Mutex::new(None)),
            run_id: Utc::now().format("%Y%m%d-%H%M%S-%3f").to_string(),
            entries: Arc::new(Mutex::new(Vec::new())),
            error_count: Arc::new(Mutex::new(0)),
            warning_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn log(&self, level: LogLevel, message: String, context: Option<serde_json::Value>) {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            level: level.clone(),
            message,
            context,
        };

        match level {
            LogLevel::Error => *lock(&self.error_count) += 1,
            LogLevel::Warning => *lock(&self.warning_count) += 1,
            LogLevel::Info => {}
        }

        let mut file_opt = lock(&self.log_file);
        if let Some(ref mut file) = *file_opt {
            if let Ok(json) = serde_json::to_string(&entry) {
                let _ = writeln!(file, "{}", json);
            }
        }
        drop(file_opt);

        lock(&self.entries).push(entry);
    }

    pub fn info(&self, message: String) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn info_with(&self, message: String, context: serde_json::Value) {
        self.log(LogLevel::Info, message, Some(context));
    }

    pub fn warning(&self, message: String, context: Option<serde_json::Value>) {
        self.log(LogLevel::Warning, message, context);
    }

    pub fn error(&self, message: String, context: Option<serde_json::Value>) {
        self.log(LogLevel::Error, message, context);
    }

    pub fn error_count(&self) -> usize {
        *lock(&self.error_count)
    }

    pub fn warning_count(&self) -> usize {
        *lock(&self.warning_count)
    }

    pub fn generate_report(&self, stats: ProcessingStats) -> Result<RunReport> {
        let mut file_opt = lock(&self.log_file);
        if let Some(ref mut file) = *file_opt {
            file.flush()
                .context("Failed to flush log file before generating report")?;
        }
        drop(file_opt);

        Ok(RunReport {
            run_id: self.run_id.clone(),
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            summary: ReportSummary {
                errors: self.error_count(),
                warnings: self.warning_count(),
                processed: stats,
            },
            entries: lock(&self.entries).clone(),
        })
    }

    /// Keeps the `max_runs` most recent run logs in the log directory.
    pub fn rotate_logs(&self, max_runs: usize) -> Result<()> {
        if self.log_dir.as_os_str().is_empty() {
            return Ok(());
        }

        let mut run_files: Vec<(PathBuf, DateTime<Utc>)> = Vec::new();

        for entry in WalkDir::new(&self.log_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.starts_with("run-") && file_name.ends_with(".jsonl") {
                    if let Ok(metadata) = entry.metadata() {
                        if let Ok(modified) = metadata.modified() {
                            run_files.push((entry.path().to_path_buf(), modified.into()));
                        }
                    }
                }
            }
        }

        if run_files.len() > max_runs {
            run_files.sort_by(|a, b| a.1.cmp(&b.1));

            let to_delete = run_files.len() - max_runs;
            for (path, _) in run_files.iter().take(to_delete) {
                fs::remove_file(path)
                    .with_context(|| format!("Failed to delete old log file: {:?}", path))?;
            }
        }

        Ok(())
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

impl Drop for DiagnosticLogger {
    fn drop(&mut self) {
        let mut file_opt = lock(&self.log_file);
        if let Some(ref mut file) = *file_opt {
            let _ = file.flush();
        }
    }
}
