use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the tagtree CLI.
///
/// All icons used by the renderer and notifiers come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const INFO: &str = "ℹ";
    pub const TAG: &str = "🏷";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const DISABLED: &str = "⊘";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const INFO: &str = "[i]";
    pub const TAG: &str = "#";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const DISABLED: &str = "[-]";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
}

/// Pick the unicode or ascii variant of an icon.
pub fn icon(unicode: bool, unicode_icon: &'static str, ascii_icon: &'static str) -> &'static str {
    if unicode {
        unicode_icon
    } else {
        ascii_icon
    }
}

/// dialoguer theme for confirmation prompts.
///
/// Wraps `ColorfulTheme` and prefixes prompts with the tag icon.
pub struct TagTreeTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl TagTreeTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn prompt_icon(&self) -> &'static str {
        icon(self.unicode, icons::TAG, icons_ascii::TAG)
    }
}

impl Theme for TagTreeTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner
            .format_prompt(f, &format!("{} {}", self.prompt_icon(), prompt))
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(
            f,
            &format!("{} {}", self.prompt_icon(), prompt),
            default,
        )
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }
}
