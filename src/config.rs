use std::path::{Path, PathBuf};

/// Destination for `--write` flattened artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteTarget {
    /// Next to the input file, as `<name>.full.<ext>`.
    Alongside,
    /// Into the given directory, same file name.
    Dir(PathBuf),
}

/// All knobs for one run. Built once from argv in `main` and passed by
/// reference everywhere; nothing reads ambient process-wide state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Skip prefix injection entirely.
    pub raw: bool,
    pub color: bool,
    /// Emit remapped diagnostics as JSON instead of the human report.
    pub json: bool,
    /// Report instruction counts via cgc.
    pub compile: bool,
    /// Print the cgc assembly listing along with the count.
    pub assembly: bool,
    pub write: Option<WriteTarget>,
    /// Directory holding the `angle/` validator binaries and `cgc`.
    pub tool_dir: PathBuf,
    /// Directory holding the default `prefix.vert` / `prefix.frag`.
    pub prefix_dir: PathBuf,
    /// Extra validator arguments, one shell-style string.
    pub validator_args: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let tool_dir = default_tool_dir();
        let prefix_dir = tool_dir.join("prefix");
        Self {
            raw: false,
            color: true,
            json: false,
            compile: false,
            assembly: false,
            write: None,
            tool_dir,
            prefix_dir,
            validator_args: None,
        }
    }
}

/// The tool binaries live next to our own executable, mirroring the
/// repository layout.
pub fn default_tool_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
