//! Structured per-step logging and progress reporting
//!
//! Every conversion stage emits timestamped step events into a
//! [`ConversionReporter`]: log entries (step number, step name, level,
//! message) and progress updates (percent complete). The reporter retains
//! the full ordered log for later inspection and pushes each event to a
//! single registered subscriber as it happens.
//!
//! The reporter is owned per converter instance, not per call; a call
//! resets the clock and clears retained events at its start. Callers
//! wanting isolated log streams must not share one converter between
//! overlapping calls.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One timestamped log event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since the conversion call started
    pub elapsed_ms: u64,

    /// Severity level
    pub level: LogLevel,

    /// 1-based conversion step number
    pub step: u32,

    /// Human-readable step name
    pub step_name: String,

    /// Event message
    pub message: String,
}

/// One progress update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Milliseconds since the conversion call started
    pub elapsed_ms: u64,

    /// Percent complete, 0-100, non-decreasing within one call
    pub percent: u8,

    /// Name of the step currently running
    pub step_name: String,
}

/// Event pushed to the registered subscriber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReporterEvent {
    Log(LogEntry),
    Progress(ProgressUpdate),
}

/// Subscriber callback receiving events as they are emitted
pub type EventCallback = Box<dyn FnMut(&ReporterEvent) + Send>;

/// Append-only event log with a single push subscriber
pub struct ConversionReporter {
    started: Instant,
    entries: Vec<LogEntry>,
    progress: Vec<ProgressUpdate>,
    callback: Option<EventCallback>,
    current_step: u32,
    current_step_name: String,
    last_percent: u8,
}

impl ConversionReporter {
    /// Create a new reporter with no subscriber
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            entries: Vec::new(),
            progress: Vec::new(),
            callback: None,
            current_step: 0,
            current_step_name: String::new(),
            last_percent: 0,
        }
    }

    /// Register the single event subscriber, replacing any previous one
    pub fn set_callback(&mut self, callback: EventCallback) {
        self.callback = Some(callback);
    }

    /// Reset for a new conversion call: restart the clock, clear events
    pub fn reset(&mut self) {
        self.started = Instant::now();
        self.entries.clear();
        self.progress.clear();
        self.current_step = 0;
        self.current_step_name.clear();
        self.last_percent = 0;
    }

    /// Milliseconds since the current call started
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Enter a conversion step, logging it at Info level
    ///
    /// Steps must be entered in increasing number order; the reporter
    /// enforces monotonicity by ignoring regressions.
    pub fn begin_step(&mut self, step: u32, step_name: &str) {
        if step > self.current_step {
            self.current_step = step;
            self.current_step_name = step_name.to_string();
        }
        self.log(LogLevel::Info, format!("Starting: {}", step_name));
    }

    /// Append a log entry at the current step
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry {
            elapsed_ms: self.elapsed_ms(),
            level,
            step: self.current_step,
            step_name: self.current_step_name.clone(),
            message: message.into(),
        };

        self.entries.push(entry.clone());
        if let Some(callback) = &mut self.callback {
            callback(&ReporterEvent::Log(entry));
        }
    }

    /// Log a Success entry (marks the current step complete)
    pub fn success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a Warning entry (recoverable per-row issue)
    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an Error entry (fatal failure)
    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Emit a progress update, clamped to be non-decreasing within the call
    pub fn progress(&mut self, percent: u8) {
        let percent = percent.min(100).max(self.last_percent);
        self.last_percent = percent;

        let update = ProgressUpdate {
            elapsed_ms: self.elapsed_ms(),
            percent,
            step_name: self.current_step_name.clone(),
        };

        self.progress.push(update.clone());
        if let Some(callback) = &mut self.callback {
            callback(&ReporterEvent::Progress(update));
        }
    }

    /// The full ordered log retained for the current call
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The ordered progress updates retained for the current call
    pub fn progress_updates(&self) -> &[ProgressUpdate] {
        &self.progress
    }

    /// Clone the retained log (for attaching to a conversion result)
    pub fn logs(&self) -> Vec<LogEntry> {
        self.entries.clone()
    }

    /// Per-step durations computed by differencing consecutive Success
    /// entries' elapsed times
    pub fn step_durations(&self) -> Vec<(String, u64)> {
        let mut durations = Vec::new();
        let mut previous_ms = 0;

        for entry in &self.entries {
            if entry.level == LogLevel::Success {
                durations.push((entry.step_name.clone(), entry.elapsed_ms - previous_ms));
                previous_ms = entry.elapsed_ms;
            }
        }

        durations
    }
}

impl Default for ConversionReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConversionReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionReporter")
            .field("entries", &self.entries.len())
            .field("progress", &self.progress.len())
            .field("current_step", &self.current_step)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
