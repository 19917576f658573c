use super::flattener::flatten;
use super::types::FlattenedUnit;
use crate::config::Config;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

/// A shader containing this token anywhere opts out of prefix injection.
pub const RAW_MARKER: &str = "RawShader";

/// Shader stage, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("vert") => Some(Self::Vertex),
            Some("frag") => Some(Self::Fragment),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }

    /// cgc profile name for this stage.
    pub fn profile(self) -> &'static str {
        match self {
            Self::Vertex => "gpu_vp",
            Self::Fragment => "gpu_fp",
        }
    }

    /// File name of the prefix shader for this stage.
    pub fn prefix_name(self) -> &'static str {
        match self {
            Self::Vertex => "prefix.vert",
            Self::Fragment => "prefix.frag",
        }
    }
}

/// True for files named `prefix.vert` / `prefix.frag` (case-insensitive),
/// which are prefix candidates rather than shaders to validate.
pub fn is_prefix_file(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| {
            name.eq_ignore_ascii_case("prefix.vert") || name.eq_ignore_ascii_case("prefix.frag")
        })
}

fn supplied_prefix(candidates: &[PathBuf], stage: ShaderStage) -> Option<&Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|p| {
            p.file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|name| name.eq_ignore_ascii_case(stage.prefix_name()))
        })
}

/// Flatten a shader and prepend the stage prefix unless suppressed.
///
/// The prefix is skipped when `config.raw` is set or the flattened text
/// contains [`RAW_MARKER`]. Otherwise the caller-supplied candidate
/// matching the shader's extension wins, falling back to the default
/// prefix under `config.prefix_dir`. Prefix lines come first and keep
/// labels pointing at their own origin.
pub fn build_validation_input(
    shader_file: &Path,
    prefix_candidates: &[PathBuf],
    config: &Config,
) -> io::Result<FlattenedUnit> {
    let stage = ShaderStage::from_path(shader_file).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unrecognized shader extension: {}", shader_file.display()),
        )
    })?;

    let shader = flatten(shader_file)?;

    if config.raw || shader.text.contains(RAW_MARKER) {
        return Ok(shader);
    }

    let prefix_file = supplied_prefix(prefix_candidates, stage)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.prefix_dir.join(stage.prefix_name()));

    let mut combined = flatten(&prefix_file)?;
    combined.append(shader);
    Ok(combined)
}
