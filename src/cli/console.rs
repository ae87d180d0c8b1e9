use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a warning line, highlighted when colors are on.
pub fn format_warning(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}", message.yellow())
    } else {
        message.to_string()
    }
}

/// Format the final status line: green on success, red on failure.
pub fn format_status(message: &str, success: bool, use_colors: bool) -> String {
    match (use_colors, success) {
        (false, _) => message.to_string(),
        (true, true) => format!("{}", message.green()),
        (true, false) => format!("{}", message.red().bold()),
    }
}
