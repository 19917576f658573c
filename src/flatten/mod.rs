mod flattener;
mod prefix;
mod types;

pub use flattener::flatten;
pub use prefix::{build_validation_input, is_prefix_file, ShaderStage, RAW_MARKER};
pub use types::{FlattenedUnit, SourceLocation};
