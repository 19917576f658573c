mod parser;
mod remapper;

pub use parser::{parse_line, RawDiagnostic, Severity};
pub use remapper::{remap, RemappedDiagnostic};
