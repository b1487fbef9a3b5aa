//! Workflow command formatting.
//!
//! The runner parses `::command key=value::message` lines on stdout and
//! `name<<delimiter` blocks in the `GITHUB_OUTPUT` file.

use super::error::OutputError;

/// Escapes a command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a command property value.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Formats a workflow command line (without trailing newline).
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");
    if !properties.is_empty() {
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&rendered.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Formats an output as a heredoc block for the `GITHUB_OUTPUT` file.
///
/// # Errors
///
/// Returns [`OutputError::DelimiterCollision`] if the name or value contains
/// the delimiter.
pub fn format_file_command(
    name: &str,
    value: &str,
    delimiter: &str,
) -> Result<String, OutputError> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(OutputError::DelimiterCollision {
            name: name.to_string(),
            delimiter: delimiter.to_string(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Emits a debug message, shown when step debug logging is enabled.
pub fn debug(message: &str) {
    println!("{}", format_command("debug", &[], message));
}
