use crate::remap::RemappedDiagnostic;

const GREY: u8 = 30;

/// Wrap `s` in an ANSI bold color escape when color output is enabled.
pub fn color(s: &str, code: u8, enabled: bool) -> String {
    if enabled {
        format!("\x1b[1;{code}m{s}\x1b[1;m")
    } else {
        s.to_string()
    }
}

pub fn grey(s: &str, enabled: bool) -> String {
    color(s, GREY, enabled)
}

/// Human-readable report: one `<file>:<line>:: <message>` row per
/// diagnostic, locations greyed out so the message stands out.
pub fn format_report(diagnostics: &[RemappedDiagnostic], color_enabled: bool) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        let location = format!("{}:: ", diag.location);
        out.push_str(&grey(&location, color_enabled));
        out.push_str(&diag.message);
        out.push('\n');
    }
    out
}

/// Machine-readable report for editor integration.
pub fn format_json(diagnostics: &[RemappedDiagnostic]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diagnostics)
}
