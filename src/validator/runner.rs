use super::command::{compile_command, validator_command};
use crate::config::Config;
use crate::flatten::{FlattenedUnit, ShaderStage};
use std::io::{self, Write};
use std::process::Output;
use tempfile::NamedTempFile;

/// Exit status and combined output of one validator run.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub exit_code: i32,
    pub output: String,
}

impl ValidationOutcome {
    /// Validation passed. When this holds, output content is irrelevant
    /// and no diagnostics exist by contract.
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Result of a cgc instruction-count run.
#[derive(Debug)]
pub enum CompileOutcome {
    Info(CompileInfo),
    /// cgc exited nonzero; raw output kept for display.
    Failed(String),
}

#[derive(Debug)]
pub struct CompileInfo {
    pub assembly: String,
    pub summary: String,
}

/// The external tools read from disk, so the flattened text goes into a
/// named temporary file. Dropping the handle deletes it, which covers the
/// failure paths as well as success.
fn write_temp(unit: &FlattenedUnit, stage: ShaderStage) -> io::Result<NamedTempFile> {
    let mut tmp = tempfile::Builder::new()
        .prefix("tmp_shader_")
        .suffix(&format!(".{}", stage.extension()))
        .tempfile()?;
    tmp.write_all(unit.text.as_bytes())?;
    tmp.flush()?;
    Ok(tmp)
}

fn combine_streams(output: &Output) -> String {
    // The tools write diagnostics to both streams; we fold them into one
    // string, stdout first.
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

/// Run the external validator over a flattened unit, waiting for it to
/// exit. No timeout: a hung validator blocks the run.
pub fn run_validator(
    unit: &FlattenedUnit,
    stage: ShaderStage,
    config: &Config,
) -> io::Result<ValidationOutcome> {
    let tmp = write_temp(unit, stage)?;
    let output = validator_command(config, tmp.path())?.output()?;
    Ok(ValidationOutcome {
        exit_code: output.status.code().unwrap_or(-1),
        output: combine_streams(&output),
    })
}

/// Run cgc over a flattened unit and extract the instruction summary.
pub fn compile_info(
    unit: &FlattenedUnit,
    stage: ShaderStage,
    config: &Config,
) -> io::Result<CompileOutcome> {
    let tmp = write_temp(unit, stage)?;
    let output = compile_command(config, stage, tmp.path()).output()?;
    let combined = combine_streams(&output);

    if !output.status.success() {
        return Ok(CompileOutcome::Failed(combined));
    }

    Ok(match parse_cgc_output(&combined) {
        Some(info) => CompileOutcome::Info(info),
        None => CompileOutcome::Failed(combined),
    })
}

/// cgc output: preamble up to and including a `#program main` line, then
/// the assembly listing, then one summary line prefixed by a two-byte
/// comment sigil.
fn parse_cgc_output(output: &str) -> Option<CompileInfo> {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines.iter().position(|l| l.contains("#program main"))? + 1;
    let (last, assembly_lines) = lines[start..].split_last()?;

    Some(CompileInfo {
        assembly: assembly_lines.join("\n"),
        summary: last.get(2..).unwrap_or("").to_string(),
    })
}
