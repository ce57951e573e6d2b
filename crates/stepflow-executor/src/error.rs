//! Error types for workflow execution.

use std::path::PathBuf;

use stepflow_registry::HandlerError;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum ExecutionError {
  /// The workspace directory could not be created.
  #[error("failed to prepare workspace '{}': {source}", .path.display())]
  Workspace {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A node names an artifact that is not part of the graph.
  #[error("node '{node_id}' references unknown artifact '{artifact}'")]
  UnknownArtifact { node_id: String, artifact: String },

  /// Ordering could not make progress. No handler was invoked.
  #[error(
    "cycle or unresolved dependency in workflow graph; nodes never ready: {}",
    .unordered.join(", ")
  )]
  CycleOrDanglingDependency { unordered: Vec<String> },

  /// No handler is registered for the node's kind.
  #[error("no handler registered for step kind '{kind}' (node '{node_id}')")]
  HandlerNotFound { node_id: String, kind: String },

  /// The node's handler failed. The handler's error is kept as the source.
  #[error("step '{node_id}' (kind '{kind}') failed: {source}")]
  HandlerExecution {
    node_id: String,
    kind: String,
    #[source]
    source: HandlerError,
  },
}

impl ExecutionError {
  /// Id of the node the run stopped at, when the failure belongs to one node.
  pub fn node_id(&self) -> Option<&str> {
    match self {
      Self::UnknownArtifact { node_id, .. }
      | Self::HandlerNotFound { node_id, .. }
      | Self::HandlerExecution { node_id, .. } => Some(node_id),
      Self::Workspace { .. } | Self::CycleOrDanglingDependency { .. } => None,
    }
  }
}
