//! Stepflow Steps
//!
//! Small, domain-free handlers that move bytes between local artifact
//! locations. They are what the `stepflow` binary registers by default and
//! double as reference implementations of the handler contract.
//!
//! | kind     | behaviour                                                  |
//! |----------|------------------------------------------------------------|
//! | `emit`   | write `params.value` (or all params) as JSON to each output |
//! | `copy`   | copy input *i* to output *i*                               |
//! | `concat` | concatenate all inputs into each output                    |
//!
//! Only local paths are supported; a `scheme://` location is an error.

mod concat;
mod copy;
mod emit;
mod error;
mod fs;

pub use concat::ConcatHandler;
pub use copy::CopyHandler;
pub use emit::EmitHandler;
pub use error::StepError;

use stepflow_registry::StepRegistry;

pub const EMIT: &str = "emit";
pub const COPY: &str = "copy";
pub const CONCAT: &str = "concat";

/// Register every built-in handler under its default kind.
pub fn register_builtin(registry: &mut StepRegistry) {
  registry.register(EMIT, EmitHandler);
  registry.register(COPY, CopyHandler);
  registry.register(CONCAT, ConcatHandler);
}
