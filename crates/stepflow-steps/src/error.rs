use thiserror::Error;

/// Failures of the built-in handlers.
#[derive(Debug, Error)]
pub enum StepError {
  #[error("node '{node_id}': expected {expected}, got {inputs} input(s) and {outputs} output(s)")]
  Arity {
    node_id: String,
    expected: &'static str,
    inputs: usize,
    outputs: usize,
  },

  #[error("node '{node_id}': '{location}' is not a local path")]
  RemoteLocation { node_id: String, location: String },

  #[error("node '{node_id}': input '{location}' does not exist")]
  MissingInput { node_id: String, location: String },

  #[error("i/o error at '{location}': {source}")]
  Io {
    location: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to encode params: {0}")]
  Encode(#[from] serde_json::Error),
}
