use super::types::{FlattenedUnit, SourceLocation};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An include directive must start at column 0; `#include` appearing
/// elsewhere in a line is ordinary text.
const INCLUDE_PREFIX: &str = "#include ";

/// Recursively expand `#include <path>` directives into a single flat
/// buffer. Include targets resolve relative to the directory of the file
/// that names them, so nested includes may use their own local paths.
pub fn flatten(path: &Path) -> io::Result<FlattenedUnit> {
    let mut in_progress = Vec::new();
    flatten_inner(path, &mut in_progress)
}

fn flatten_inner(path: &Path, in_progress: &mut Vec<PathBuf>) -> io::Result<FlattenedUnit> {
    if in_progress.iter().any(|p| p.as_path() == path) {
        return Err(cycle_error(path, in_progress));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("could not read {}: {}", path.display(), e)))?;

    in_progress.push(path.to_path_buf());

    let mut text = String::new();
    let mut line_labels = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line_num = idx + 1;

        if let Some(include_target) = line.strip_prefix(INCLUDE_PREFIX) {
            let parent = path.parent().unwrap_or_else(|| Path::new(""));
            let full_path = parent.join(include_target);

            // The include line itself emits nothing; the included file's
            // lines take its place.
            let included = flatten_inner(&full_path, in_progress)?;
            text.push_str(&included.text);
            line_labels.extend(included.line_labels);
        } else {
            text.push_str(line);
            text.push('\n');
            line_labels.push(SourceLocation::new(path, line_num));
        }
    }

    in_progress.pop();

    Ok(FlattenedUnit { text, line_labels })
}

fn cycle_error(path: &Path, in_progress: &[PathBuf]) -> io::Error {
    let chain = in_progress
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("cyclic include of {} via {}", path.display(), chain),
    )
}
