use thiserror::Error;

/// Errors raised while building or validating a graph.
#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("node '{node_id}' references unknown artifact '{artifact}'")]
  UnknownArtifact { node_id: String, artifact: String },

  #[error("node '{node_id}' depends on unknown node '{dependency}'")]
  UnknownDependency { node_id: String, dependency: String },

  #[error("invalid node '{node_id}': {message}")]
  InvalidNode { node_id: String, message: String },

  #[error("artifact key '{key}' does not match artifact name '{name}'")]
  ArtifactNameMismatch { key: String, name: String },
}

/// The dependency graph could not be fully ordered.
///
/// Raised for cycles (including self-dependencies) and for dependencies on
/// node ids that do not exist. `unordered` lists every node that never became
/// eligible, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
  "cycle or unresolved dependency in workflow graph; unordered nodes: {}",
  .unordered.join(", ")
)]
pub struct OrderError {
  pub unordered: Vec<String>,
}
