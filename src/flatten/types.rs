use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A single physical line in an original (pre-flattening) source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-based physical line number within `file`.
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// Output of flattening one root file: the concatenated text plus one
/// origin label per emitted line, in the same order.
#[derive(Debug, Clone)]
pub struct FlattenedUnit {
    pub text: String,
    pub line_labels: Vec<SourceLocation>,
}

impl FlattenedUnit {
    /// Splice another unit's lines onto the end of this one, labels in
    /// lockstep.
    pub fn append(&mut self, mut other: FlattenedUnit) {
        self.text.push_str(&other.text);
        self.line_labels.append(&mut other.line_labels);
    }
}
