use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic exactly as the validator reports it: the line number
/// refers to the flattened unit, not any original file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiagnostic {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

/// Parse one line of validator output.
///
/// Grammar (the tool's versionless contract): a severity token `ERROR` or
/// `WARNING`, the literal `: 0:`, a decimal line number, `: `, then the
/// message as free text. Anything else yields `None`.
pub fn parse_line(line: &str) -> Option<RawDiagnostic> {
    let line = line.trim_end_matches(['\r', '\n']);

    let (severity, rest) = if let Some(rest) = line.strip_prefix("ERROR") {
        (Severity::Error, rest)
    } else if let Some(rest) = line.strip_prefix("WARNING") {
        (Severity::Warning, rest)
    } else {
        return None;
    };

    let rest = rest.strip_prefix(": 0:")?;
    let (digits, message) = rest.split_once(": ")?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let line_num = digits.parse::<usize>().ok()?;

    Some(RawDiagnostic {
        severity,
        line: line_num,
        message: message.to_string(),
    })
}
