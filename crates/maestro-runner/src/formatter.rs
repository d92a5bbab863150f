//! Flow script normalization.
//!
//! Inline flows are often typed without the `appId` header or the leading
//! dashes Maestro expects. [`format_flow`] fills both in.

use serde_yml::Value;

/// Header used when a flow has none, or one that does not parse.
pub const DEFAULT_HEADER: &str = "appId: any";

const SEPARATOR: &str = "---";

/// Normalize a flow script.
///
/// Blank lines are dropped and command lines trimmed. Lines before a `---`
/// separator are the YAML header and keep their indentation.
pub fn format_flow(code: &str) -> String {
    let lines: Vec<&str> = code
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return format!("{}\n{}\n", DEFAULT_HEADER, SEPARATOR);
    }

    let (header, commands) = match lines.iter().position(|line| line.trim() == SEPARATOR) {
        Some(separator) => (normalize_header(&lines[..separator]), &lines[separator + 1..]),
        None => (DEFAULT_HEADER.to_string(), &lines[..]),
    };

    let commands: Vec<String> = commands
        .iter()
        .map(|line| {
            let line = line.trim();
            if line.starts_with('-') {
                line.to_string()
            } else {
                format!("- {}", line)
            }
        })
        .collect();

    format!("{}\n{}\n{}\n", header, SEPARATOR, commands.join("\n"))
}

fn normalize_header(lines: &[&str]) -> String {
    let yaml = lines.join("\n");
    match serde_yml::from_str::<Value>(&yaml) {
        Ok(value @ (Value::Mapping(_) | Value::Sequence(_))) => serde_yml::to_string(&value)
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_HEADER.to_string()),
        _ => DEFAULT_HEADER.to_string(),
    }
}
