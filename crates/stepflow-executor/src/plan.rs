//! Dry-run planning: everything a run decides before the first handler executes.

use std::path::Path;

use serde::Serialize;
use stepflow_workflow::GraphIR;

use crate::backend::ArtifactLocations;
use crate::error::ExecutionError;
use crate::resolve::resolve_artifacts;

/// Resolved locations and execution order for one graph and workspace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
  pub order: Vec<String>,
  pub artifacts: ArtifactLocations,
}

/// Resolve artifacts and order nodes without touching the filesystem.
///
/// Fails the same way a run would before any handler is invoked: a node
/// naming an undeclared artifact, or a graph that cannot be ordered.
pub fn plan(graph: &GraphIR, workspace: &Path) -> Result<Plan, ExecutionError> {
  for node in graph.nodes.values() {
    if let Some(missing) = node
      .artifact_names()
      .find(|name| !graph.artifacts.contains_key(*name))
    {
      return Err(ExecutionError::UnknownArtifact {
        node_id: node.id.clone(),
        artifact: missing.to_string(),
      });
    }
  }

  let artifacts = resolve_artifacts(graph, workspace);

  let order = graph
    .execution_order()
    .map_err(|e| ExecutionError::CycleOrDanglingDependency {
      unordered: e.unordered,
    })?;

  Ok(Plan { order, artifacts })
}
