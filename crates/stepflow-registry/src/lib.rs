//! Stepflow Registry
//!
//! The contract between the engine and the code that actually does the work:
//!
//! - [`StepHandler`]: executes one node of a given kind
//! - [`ExecutionContext`]: what a handler gets to see (workspace and resolved artifacts)
//! - [`StepRegistry`]: kind string to handler lookup table
//!
//! The registry is an explicit value rather than a process global. Build it
//! once at start-up, register every handler, then share it (`Arc`) with the
//! backends. Backends only ever hold a shared reference, so nothing can be
//! registered while a run is in progress.

mod context;
mod error;
mod handler;
mod registry;

pub use context::ExecutionContext;
pub use error::RegistryError;
pub use handler::{HandlerError, StepHandler, StepOutput};
pub use registry::StepRegistry;
