mod command;
mod runner;

pub use command::{cgc_path, compile_command, essl_to_glsl_path, validator_command};
pub use runner::{compile_info, run_validator, CompileInfo, CompileOutcome, ValidationOutcome};
