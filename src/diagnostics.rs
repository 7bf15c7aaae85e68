//! Stderr diagnostics in the `WARN:` / `ERROR:` style used across the tool.

/// Prefix a message for display as a hard error.
pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("ERROR: {}", msg.as_ref())
}

/// Prefix a message for display as a warning.
pub fn warn_message(msg: impl AsRef<str>) -> String {
    format!("WARN: {}", msg.as_ref())
}

/// Print a warning to stderr.
pub fn warn(msg: impl AsRef<str>) {
    eprintln!("{}", warn_message(msg));
}
