use super::parser::{parse_line, Severity};
use crate::flatten::SourceLocation;
use serde::Serialize;

/// The validator frames its diagnostics with a one-line banner above and a
/// four-line summary below. Neither carries information we keep.
const HEADER_LINES: usize = 1;
const FOOTER_LINES: usize = 4;

/// A diagnostic translated back to the original file and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemappedDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub location: SourceLocation,
    pub message: String,
}

/// Translate flattened-line diagnostics to their original source lines.
///
/// Non-diagnostic lines are dropped silently, and a line number outside
/// the unit (a defect in the tool's output) is skipped rather than
/// crashing. When the output is too short to contain the framing at all,
/// the result is empty. Output order follows raw-output order.
pub fn remap(raw_output: &str, line_labels: &[SourceLocation]) -> Vec<RemappedDiagnostic> {
    let lines: Vec<&str> = raw_output.lines().collect();
    if lines.len() <= HEADER_LINES + FOOTER_LINES {
        return Vec::new();
    }
    let body = &lines[HEADER_LINES..lines.len() - FOOTER_LINES];

    let mut diagnostics = Vec::new();
    for raw in body {
        let Some(diag) = parse_line(raw) else {
            continue;
        };
        let Some(location) = diag.line.checked_sub(1).and_then(|i| line_labels.get(i)) else {
            continue;
        };
        diagnostics.push(RemappedDiagnostic {
            severity: diag.severity,
            location: location.clone(),
            message: diag.message,
        });
    }
    diagnostics
}
