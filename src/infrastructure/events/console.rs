//! Console Notifier
//!
//! Human-readable notices with themed icons, and interactive confirmations.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::{Notice, Notifier};
use crate::ui::theme::{colors, icon, icons, icons_ascii, TagTreeTheme};

/// Render a notice as one line of terminal output
pub fn format_notice(notice: &Notice, supports_color: bool, supports_unicode: bool) -> String {
    let (glyph, color) = match notice {
        Notice::Info(_) => (
            icon(supports_unicode, icons::INFO, icons_ascii::INFO),
            colors::INFO,
        ),
        Notice::Success(_) => (
            icon(supports_unicode, icons::SUCCESS, icons_ascii::SUCCESS),
            colors::SUCCESS,
        ),
        Notice::Error(_) => (
            icon(supports_unicode, icons::ERROR, icons_ascii::ERROR),
            colors::ERROR,
        ),
    };

    if supports_color {
        format!("{} {}", glyph.with(color), notice.text())
    } else {
        format!("{} {}", glyph, notice.text())
    }
}

pub struct ConsoleNotifier {
    writer: Mutex<Box<dyn Write + Send>>,
    supports_color: bool,
    supports_unicode: bool,
    /// Answer every confirmation with yes
    assume_yes: bool,
}

impl ConsoleNotifier {
    pub fn stderr(supports_color: bool, supports_unicode: bool) -> Self {
        Self::with_writer(io::stderr(), supports_color, supports_unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        supports_color: bool,
        supports_unicode: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            supports_color,
            supports_unicode,
            assume_yes: false,
        }
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let line = format_notice(&notice, self.supports_color, self.supports_unicode);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn confirm(&self, text: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if !io::stdin().is_terminal() {
            log::warn!("cannot confirm '{}' without a terminal; pass --yes", text);
            return false;
        }

        Confirm::with_theme(&TagTreeTheme::new(self.supports_unicode))
            .with_prompt(text)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
