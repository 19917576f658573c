pub mod config;
pub mod flatten;
pub mod remap;
pub mod report;
pub mod validator;
