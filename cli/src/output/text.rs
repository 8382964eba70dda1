//! Unicode-aware width helpers for terminal layout

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text`
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad `text` with spaces on the right up to `width` columns
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text));
    format!("{}{}", text, " ".repeat(pad))
}

/// Pad `text` with spaces on the left up to `width` columns
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text));
    format!("{}{}", " ".repeat(pad), text)
}

/// Wrap text at word boundaries; words wider than `max_width` are split
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in line.split_whitespace() {
            let word_width = text_width(word);

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > max_width {
                for ch in word.chars() {
                    let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + w > max_width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
                continue;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Terminal width with a fallback for non-tty output
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(80)
        .max(40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_simple() {
        assert_eq!(wrap_text("Hello world", 20), vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_text_long_line() {
        let text = "Visualizations of bed demand & staffing will appear here.";
        let wrapped = wrap_text(text, 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(text_width(line) <= 20);
        }
        assert_eq!(wrapped.join(" "), text);
    }

    #[test]
    fn test_wrap_long_word() {
        let wrapped = wrap_text("abcdefghij", 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_padding_uses_display_width() {
        assert_eq!(pad_right("ICU", 6), "ICU   ");
        assert_eq!(pad_left("12", 4), "  12");
        assert_eq!(text_width(&pad_right("📊 x", 6)), 6);
    }

    #[test]
    fn test_terminal_width_has_floor() {
        assert!(terminal_width() >= 40);
    }
}
