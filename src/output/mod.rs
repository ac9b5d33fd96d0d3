//! Styled terminal output for gogrant
//!
//! Prompts and notices go to stdout so a piped transcript keeps them in order.

use owo_colors::OwoColorize;
use std::io::Write;

/// Print prompt text without a trailing newline and flush it
pub fn prompt(text: &str) {
    // Pastel sky blue: RGB(160, 200, 255)
    print!("{}", text.truecolor(160, 200, 255));
    let _ = std::io::stdout().flush();
}

/// Print a success message with a green checkmark
pub fn success(message: &str) {
    // Pastel mint green: RGB(152, 225, 152)
    println!(
        "{} {}",
        "✓".truecolor(152, 225, 152).bold(),
        message.bright_white()
    );
}

/// Print a warning message with a yellow warning symbol
pub fn warning(message: &str) {
    // Pastel cream/yellow: RGB(255, 230, 160)
    println!(
        "{} {}",
        "⚠".truecolor(255, 230, 160).bold(),
        message.bright_white()
    );
}
