use glsl_validate::config::{Config, WriteTarget};
use glsl_validate::flatten::{self, ShaderStage};
use glsl_validate::remap;
use glsl_validate::report;
use glsl_validate::validator::{self, CompileOutcome};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str =
    "usage: glsl-validate [--raw] [--no-color] [--json] [--compile] [--assembly] \
     [--write [DIR]] [--args STR] FILE...";

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (config, files) = match parse_args(&argv) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if files.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    for file in &files {
        if ShaderStage::from_path(file).is_none() {
            eprintln!(
                "Invalid file: {}, only support .frag and .vert files",
                file.display()
            );
            return ExitCode::FAILURE;
        }
    }

    // Files named prefix.vert / prefix.frag are prefix candidates for the
    // other inputs, not shaders to validate on their own.
    let (shader_files, prefix_files) = if config.raw {
        (files.clone(), Vec::new())
    } else {
        partition_prefixes(&files)
    };

    let mut failed = false;
    for shader in &shader_files {
        match validate_shader(shader, &prefix_files, &config) {
            Ok(true) => {}
            Ok(false) => failed = true,
            Err(err) => {
                eprintln!("{}: {}", shader.display(), err);
                failed = true;
            }
        }
    }

    if config.compile {
        for shader in &shader_files {
            if let Err(err) = print_compile_info(shader, &prefix_files, &config) {
                eprintln!("{}: {}", shader.display(), err);
                failed = true;
            }
        }
    }

    if let Some(target) = &config.write {
        for file in &files {
            if let Err(err) = write_flattened(file, target) {
                eprintln!("{}: {}", file.display(), err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn parse_args(argv: &[String]) -> Result<(Config, Vec<PathBuf>), String> {
    let mut config = Config::default();
    let mut files = Vec::new();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--raw" => config.raw = true,
            "--json" => config.json = true,
            "--compile" => config.compile = true,
            "--assembly" => config.assembly = true,
            "--write" => {
                // Optional value: only an existing directory counts, so a
                // following shader file is not swallowed.
                match argv.get(i + 1) {
                    Some(next) if Path::new(next).is_dir() => {
                        config.write = Some(WriteTarget::Dir(PathBuf::from(next)));
                        i += 1;
                    }
                    _ => config.write = Some(WriteTarget::Alongside),
                }
            }
            "--args" => {
                let value = argv.get(i + 1).ok_or("--args requires a value")?;
                config.validator_args = Some(value.clone());
                i += 1;
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {flag}")),
            file => files.push(PathBuf::from(file)),
        }
        i += 1;
    }

    Ok((config, files))
}

fn partition_prefixes(files: &[PathBuf]) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut shaders = Vec::new();
    let mut prefixes = Vec::new();
    for file in files {
        if flatten::is_prefix_file(file) {
            if !prefixes.contains(file) {
                prefixes.push(file.clone());
            }
        } else if !shaders.contains(file) {
            shaders.push(file.clone());
        }
    }
    (shaders, prefixes)
}

/// Flatten, validate, remap, report. `Ok(true)` means the shader passed;
/// `Ok(false)` means diagnostics (or an unmappable failure) were reported.
fn validate_shader(shader: &Path, prefix_files: &[PathBuf], config: &Config) -> io::Result<bool> {
    let Some(stage) = ShaderStage::from_path(shader) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unrecognized shader extension: {}", shader.display()),
        ));
    };

    let unit = flatten::build_validation_input(shader, prefix_files, config)?;
    let outcome = validator::run_validator(&unit, stage, config)?;
    if outcome.passed() {
        return Ok(true);
    }

    let diagnostics = remap::remap(&outcome.output, &unit.line_labels);
    if diagnostics.is_empty() {
        // Nonzero exit but nothing we could map; fall back to raw output.
        eprintln!("{}: validation failed", shader.display());
        eprint!("{}", outcome.output);
    } else if config.json {
        println!("{}", report::format_json(&diagnostics)?);
    } else {
        print!("{}", report::format_report(&diagnostics, config.color));
    }
    Ok(false)
}

fn print_compile_info(shader: &Path, prefix_files: &[PathBuf], config: &Config) -> io::Result<()> {
    let Some(stage) = ShaderStage::from_path(shader) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unrecognized shader extension: {}", shader.display()),
        ));
    };

    let unit = flatten::build_validation_input(shader, prefix_files, config)?;
    match validator::compile_info(&unit, stage, config)? {
        CompileOutcome::Info(info) => {
            if config.assembly {
                println!("{}", info.assembly);
            }
            println!("{} {}", shader.display(), info.summary);
        }
        CompileOutcome::Failed(output) => {
            eprintln!("{}: cgc failed", shader.display());
            eprint!("{output}");
        }
    }
    Ok(())
}

/// Write the flattened text (no prefix injection) for `--write`.
fn write_flattened(file: &Path, target: &WriteTarget) -> io::Result<()> {
    let unit = flatten::flatten(file)?;
    fs::write(flattened_dest(file, target), unit.text)
}

/// `foo.frag` becomes `foo.full.frag`, alongside the input or in the
/// requested directory.
fn flattened_dest(file: &Path, target: &WriteTarget) -> PathBuf {
    let stem = file.file_stem().and_then(OsStr::to_str).unwrap_or("shader");
    let ext = file.extension().and_then(OsStr::to_str).unwrap_or("");
    let name = format!("{stem}.full.{ext}");
    match target {
        WriteTarget::Alongside => file.with_file_name(name),
        WriteTarget::Dir(dir) => dir.join(name),
    }
}
