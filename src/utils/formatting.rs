//! Formatting utilities used for CLI output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns, not chars. The catalog is Japanese
/// text, so double-width characters must be counted as two columns or
/// every table column drifts.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Wrap free text to `width` columns, indenting continuation lines.
pub fn wrap_indented(s: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width).subsequent_indent(indent);
    textwrap::fill(s, options)
}

/// "90" → "90 min", absent → "--" (shown grey upstream).
pub fn mins2readable(mins: Option<u32>) -> String {
    match mins {
        Some(m) if m >= 60 && m % 60 == 0 => format!("{}h", m / 60),
        Some(m) if m >= 60 => format!("{}h {:02}m", m / 60, m % 60),
        Some(m) => format!("{} min", m),
        None => "--".to_string(),
    }
}
