use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use stepflow_workflow::NodeIR;

use crate::handler::HandlerError;

/// The view of a run handed to every handler.
///
/// Holds the workspace root and the resolved location of every artifact in
/// the graph. It is built once per run, before the first handler executes,
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
  run_id: String,
  workspace: PathBuf,
  artifacts: IndexMap<String, String>,
}

impl ExecutionContext {
  pub fn new(
    run_id: impl Into<String>,
    workspace: impl Into<PathBuf>,
    artifacts: IndexMap<String, String>,
  ) -> Self {
    Self {
      run_id: run_id.into(),
      workspace: workspace.into(),
      artifacts,
    }
  }

  pub fn run_id(&self) -> &str {
    &self.run_id
  }

  pub fn workspace(&self) -> &Path {
    &self.workspace
  }

  /// Artifact name to resolved location, for the whole graph.
  pub fn artifacts(&self) -> &IndexMap<String, String> {
    &self.artifacts
  }

  /// Consume the context, keeping only the resolved artifact map.
  pub fn into_artifacts(self) -> IndexMap<String, String> {
    self.artifacts
  }

  /// Resolved location of a single artifact.
  pub fn location(&self, name: &str) -> Option<&str> {
    self.artifacts.get(name).map(String::as_str)
  }

  /// Location of the node's `index`-th input.
  pub fn input_location(&self, node: &NodeIR, index: usize) -> Result<&str, HandlerError> {
    let name = node.inputs.get(index).ok_or_else(|| {
      format!(
        "node '{}' has {} input(s), no input at position {}",
        node.id,
        node.inputs.len(),
        index
      )
    })?;
    self.require(&node.id, name)
  }

  /// Location of the node's `index`-th output.
  pub fn output_location(&self, node: &NodeIR, index: usize) -> Result<&str, HandlerError> {
    let name = node.outputs.get(index).ok_or_else(|| {
      format!(
        "node '{}' has {} output(s), no output at position {}",
        node.id,
        node.outputs.len(),
        index
      )
    })?;
    self.require(&node.id, name)
  }

  fn require(&self, node_id: &str, name: &str) -> Result<&str, HandlerError> {
    self.location(name).ok_or_else(|| {
      format!(
        "node '{}': artifact '{}' has no resolved location",
        node_id, name
      )
      .into()
    })
  }
}
