//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Severity tag shown in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Warn,
    Error,
}

impl Tag {
    fn as_str(self) -> &'static str {
        match self {
            Tag::Ok => "[OK]",
            Tag::Warn => "[WARN]",
            Tag::Error => "[ERROR]",
        }
    }
}

/// Header line, styled unless `plain`.
#[must_use]
pub fn header_line(text: &str, plain: bool) -> String {
    let line = format!("=== {text} ===");
    if plain {
        line
    } else {
        style(line).bold().cyan().to_string()
    }
}

/// Status line such as `[WARN] text`, styled unless `plain`.
#[must_use]
pub fn tagged_line(tag: Tag, text: &str, plain: bool) -> String {
    if plain {
        return format!("{} {text}", tag.as_str());
    }
    let styled = match tag {
        Tag::Ok => style(tag.as_str()).green().bold(),
        Tag::Warn => style(tag.as_str()).yellow().bold(),
        Tag::Error => style(tag.as_str()).red().bold(),
    };
    format!("{styled} {text}")
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, is_color_disabled()));
}

/// Print a styled section title.
pub fn print_section(text: &str) {
    if is_color_disabled() {
        println!("\n{text}");
    } else {
        println!("\n{}", style(text).bold());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    println!("{}", tagged_line(Tag::Ok, text, is_color_disabled()));
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    eprintln!("{}", tagged_line(Tag::Warn, text, is_color_disabled()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged_line(Tag::Error, text, is_color_disabled()));
}
