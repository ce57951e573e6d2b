use thiserror::Error;

/// Errors returned by [`StepRegistry`](crate::StepRegistry) lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  #[error("no handler registered for step kind '{kind}'")]
  HandlerNotFound { kind: String },
}
