//! Loading spinner shown on stderr while data is fetched

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::UiContext;

const ASCII_TICKS: &str = "|/-\\ ";

/// Spinner for a fetch, or `None` when output is NDJSON.
///
/// indicatif hides the bar on its own when stderr is not a terminal.
pub fn loading_spinner(ui: &UiContext, message: &str) -> Option<ProgressBar> {
    if ui.json {
        return None;
    }

    let template = if ui.color {
        "{spinner:.cyan} {msg}"
    } else {
        "{spinner} {msg}"
    };
    let mut style = ProgressStyle::default_spinner()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    if !ui.unicode {
        style = style.tick_chars(ASCII_TICKS);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    Some(spinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::terminal::TerminalCapabilities;

    fn ui(json: bool) -> UiContext {
        let caps = TerminalCapabilities {
            is_tty: false,
            stdin_is_tty: false,
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
        };
        UiContext::from_caps(json, 0, None, &Config::default(), caps)
    }

    #[test]
    fn json_output_has_no_spinner() {
        assert!(loading_spinner(&ui(true), "Refreshing").is_none());
    }

    #[test]
    fn text_output_spins_with_message() {
        let spinner = loading_spinner(&ui(false), "Refreshing classifications").unwrap();
        assert_eq!(spinner.message(), "Refreshing classifications");
        spinner.finish_and_clear();
        assert!(spinner.is_finished());
    }
}
