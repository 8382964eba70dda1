//! ANSI styling that can be switched off

use hms_core::Rgb;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GRAY: &str = "\x1b[90m";

/// Applies 24-bit ANSI colours, or nothing when colour is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: bool,
}

impl TextStyle {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Foreground colour
    pub fn fg(&self, text: &str, rgb: Rgb) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[38;2;{};{};{}m{}{}", rgb.r, rgb.g, rgb.b, text, RESET)
    }

    /// Bold foreground colour
    pub fn strong(&self, text: &str, rgb: Rgb) -> String {
        if !self.color {
            return text.to_string();
        }
        format!(
            "{}\x1b[38;2;{};{};{}m{}{}",
            BOLD, rgb.r, rgb.g, rgb.b, text, RESET
        )
    }

    /// Foreground on background
    pub fn on(&self, text: &str, fg: Rgb, bg: Rgb) -> String {
        if !self.color {
            return text.to_string();
        }
        format!(
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}{}",
            fg.r, fg.g, fg.b, bg.r, bg.g, bg.b, text, RESET
        )
    }

    pub fn gray(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("{}{}{}", GRAY, text, RESET)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Remove ANSI escape sequences
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequences end with an ASCII letter
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}
