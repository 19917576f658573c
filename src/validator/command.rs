use crate::config::Config;
use crate::flatten::ShaderStage;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Platform-specific ANGLE translator binary under `<tool_dir>/angle/`.
pub fn essl_to_glsl_path(config: &Config) -> PathBuf {
    let name = if cfg!(target_os = "macos") {
        "essl_to_glsl_osx"
    } else if cfg!(windows) {
        "essl_to_glsl_win.exe"
    } else {
        "essl_to_glsl_linux"
    };
    config.tool_dir.join("angle").join(name)
}

pub fn cgc_path(config: &Config) -> PathBuf {
    config.tool_dir.join("cgc")
}

/// Build the validator invocation for a flattened shader on disk.
pub fn validator_command(config: &Config, input: &Path) -> io::Result<Command> {
    let mut cmd = Command::new(essl_to_glsl_path(config));
    cmd.arg("-s=w").arg("-x=d");
    if cfg!(windows) {
        cmd.arg("-b=h");
    }
    if let Some(extra) = &config.validator_args {
        let split = shlex::split(extra).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unparseable validator arguments: {extra}"),
            )
        })?;
        cmd.args(split);
    }
    cmd.arg(input);
    Ok(cmd)
}

/// Build the cgc invocation used for instruction counting.
pub fn compile_command(config: &Config, stage: ShaderStage, input: &Path) -> Command {
    let mut cmd = Command::new(cgc_path(config));
    cmd.args(["-oglsl", "-strict", "-glslWerror", "-profile", stage.profile()]);
    cmd.arg(input);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg_strings(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn validator_binary_lives_under_angle() {
        let config = Config {
            tool_dir: PathBuf::from("tools"),
            ..Config::default()
        };
        let path = essl_to_glsl_path(&config);
        assert!(path.starts_with("tools"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("essl_to_glsl"));
    }

    #[test]
    fn extra_args_are_split_shell_style() {
        let config = Config {
            validator_args: Some("-i=1 \"two words\"".to_string()),
            ..Config::default()
        };
        let cmd = validator_command(&config, Path::new("x.frag")).unwrap();
        let args = arg_strings(&cmd);
        assert!(args.contains(&"-i=1".to_string()));
        assert!(args.contains(&"two words".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("x.frag"));
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        let config = Config {
            validator_args: Some("\"unterminated".to_string()),
            ..Config::default()
        };
        assert!(validator_command(&config, Path::new("x.frag")).is_err());
    }

    #[test]
    fn compile_command_selects_the_stage_profile() {
        let config = Config::default();
        let cmd = compile_command(&config, ShaderStage::Vertex, Path::new("x.vert"));
        let args = arg_strings(&cmd);
        let i = args.iter().position(|a| a == "-profile").unwrap();
        assert_eq!(args[i + 1], "gpu_vp");
    }
}
