use glsl_validate::flatten::SourceLocation;
use glsl_validate::remap::{remap, Severity};

// Build a label table of `n` entries, all pointing into main.frag
fn labels(n: usize) -> Vec<SourceLocation> {
    (1..=n).map(|i| SourceLocation::new("main.frag", i)).collect()
}

// Wrap diagnostic lines in the validator's one-line header and
// four-line footer framing
fn framed(body: &[&str]) -> String {
    let mut lines = vec!["tmp_shader_main.frag"];
    lines.extend_from_slice(body);
    lines.extend_from_slice(&["1 error(s)", "", "### BEGIN ###", "### END ###"]);
    lines.join("\n")
}

#[cfg(test)]
mod remap_tests {
    use super::*;

    #[test]
    fn test_error_maps_to_original_location() {
        let mut line_labels = labels(5);
        line_labels[4] = SourceLocation::new("shaders/lib.frag", 12);

        let raw = framed(&["ERROR: 0:5: undeclared identifier 'foo'"]);
        let diagnostics = remap(&raw, &line_labels);

        assert_eq!(diagnostics.len(), 1, "Exactly one diagnostic expected");
        let diag = &diagnostics[0];
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.location, SourceLocation::new("shaders/lib.frag", 12));
        assert_eq!(diag.message, "undeclared identifier 'foo'");
    }

    #[test]
    fn test_warning_severity_is_preserved() {
        let raw = framed(&["WARNING: 0:2: implicit conversion"]);
        let diagnostics = remap(&raw, &labels(3));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn test_noise_lines_are_dropped_without_aborting() {
        let raw = framed(&[
            "some banner text",
            "ERROR: 0:1: first",
            "not a diagnostic either",
            "ERROR: 0:2: second",
        ]);
        let diagnostics = remap(&raw, &labels(3));

        assert_eq!(diagnostics.len(), 2, "Noise must not hide later diagnostics");
        assert_eq!(diagnostics[0].message, "first");
        assert_eq!(diagnostics[1].message, "second");
    }

    #[test]
    fn test_order_follows_raw_output() {
        let raw = framed(&["ERROR: 0:3: third line", "ERROR: 0:1: first line"]);
        let diagnostics = remap(&raw, &labels(3));

        assert_eq!(diagnostics[0].location.line, 3);
        assert_eq!(diagnostics[1].location.line, 1);
    }

    #[test]
    fn test_out_of_range_line_is_skipped() {
        let raw = framed(&[
            "ERROR: 0:99: beyond the unit",
            "ERROR: 0:0: before the unit",
            "ERROR: 0:2: in range",
        ]);
        let diagnostics = remap(&raw, &labels(3));

        assert_eq!(
            diagnostics.len(),
            1,
            "Out-of-range line numbers are tool defects, skipped not fatal"
        );
        assert_eq!(diagnostics[0].location.line, 2);
    }

    #[test]
    fn test_output_shorter_than_framing_yields_nothing() {
        assert!(remap("", &labels(3)).is_empty());
        assert!(remap("just one line\n", &labels(3)).is_empty());
        assert!(
            remap("a\nb\nc\nd\ne\n", &labels(3)).is_empty(),
            "Five lines are all framing, no body remains"
        );
    }

    #[test]
    fn test_diagnostics_in_the_footer_are_ignored() {
        // Framing is positional; an error-shaped line in the trailing
        // summary must not be reported.
        let raw = [
            "banner",
            "ERROR: 0:1: real",
            "ERROR: 0:2: in footer",
            "summary",
            "### BEGIN ###",
            "### END ###",
        ]
        .join("\n");
        let diagnostics = remap(&raw, &labels(3));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "real");
    }

    #[test]
    fn test_crlf_output_is_handled() {
        let raw = framed(&["ERROR: 0:1: windows line\r"]);
        let diagnostics = remap(&raw, &labels(1));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "windows line");
    }
}
