//! JSON Notifier
//!
//! Outputs notices and navigation as NDJSON for automation consumption.

use crate::domain::ports::{Notice, Notifier, UrlRequest};
use std::io::{self, Write};
use std::sync::Mutex;

/// Notifier that outputs NDJSON events to stdout
pub struct JsonNotifier {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    assume_yes: bool,
}

impl JsonNotifier {
    /// Create a new JSON notifier writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON notifier writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            assume_yes: false,
        }
    }

    /// Confirmations cannot be prompted in JSON mode; this answers them.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }

    /// Emit a navigation request
    pub fn navigation(&self, request: &UrlRequest) {
        self.write_event(serde_json::json!({
            "event": "navigate",
            "url": request.full_url(),
            "trigger": request.trigger,
            "update_tab_state": request.update_tab_state,
        }));
    }
}

impl Notifier for JsonNotifier {
    fn notify(&self, notice: Notice) {
        let level = match notice {
            Notice::Info(_) => "info",
            Notice::Success(_) => "success",
            Notice::Error(_) => "error",
        };
        self.write_event(serde_json::json!({
            "event": "notice",
            "level": level,
            "message": notice.text(),
        }));
    }

    fn confirm(&self, text: &str) -> bool {
        self.write_event(serde_json::json!({
            "event": "confirm",
            "prompt": text,
            "answer": self.assume_yes,
        }));
        self.assume_yes
    }
}
