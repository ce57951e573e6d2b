use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactRef;
use crate::error::{OrderError, WorkflowError};
use crate::node::NodeIR;
use crate::order::topological_order;

/// A whole workflow: nodes and the artifacts flowing between them.
///
/// Both maps preserve insertion order, which is the declaration order used
/// to break ties between independent nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphIR {
  pub name: String,
  pub nodes: IndexMap<String, NodeIR>,
  pub artifacts: IndexMap<String, ArtifactRef>,
}

impl GraphIR {
  /// Assemble a graph without checking references.
  ///
  /// Use [`GraphIR::validate`] (or build through
  /// [`GraphIR::from_config`]) to enforce the reference invariants.
  pub fn new(
    name: impl Into<String>,
    nodes: impl IntoIterator<Item = NodeIR>,
    artifacts: impl IntoIterator<Item = ArtifactRef>,
  ) -> Self {
    Self {
      name: name.into(),
      nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
      artifacts: artifacts.into_iter().map(|a| (a.name.clone(), a)).collect(),
    }
  }

  /// Get a node by id.
  pub fn get_node(&self, node_id: &str) -> Option<&NodeIR> {
    self.nodes.get(node_id)
  }

  /// Get an artifact by name.
  pub fn get_artifact(&self, name: &str) -> Option<&ArtifactRef> {
    self.artifacts.get(name)
  }

  /// Node ids in an order consistent with every node's `deps`.
  pub fn execution_order(&self) -> Result<Vec<String>, OrderError> {
    topological_order(&self.nodes)
  }

  /// Check the reference invariants.
  ///
  /// Every artifact named by a node must be declared, every dependency must
  /// name a node, and map keys must agree with the names they index.
  /// Cycles are left to [`GraphIR::execution_order`].
  pub fn validate(&self) -> Result<(), WorkflowError> {
    for (key, artifact) in &self.artifacts {
      if key != &artifact.name {
        return Err(WorkflowError::ArtifactNameMismatch {
          key: key.clone(),
          name: artifact.name.clone(),
        });
      }
    }

    for (key, node) in &self.nodes {
      if key != &node.id {
        return Err(WorkflowError::InvalidNode {
          node_id: key.clone(),
          message: format!("map key does not match node id '{}'", node.id),
        });
      }
      if node.id.is_empty() {
        return Err(WorkflowError::InvalidNode {
          node_id: node.id.clone(),
          message: "node id is empty".to_string(),
        });
      }
      if node.kind.is_empty() {
        return Err(WorkflowError::InvalidNode {
          node_id: node.id.clone(),
          message: "kind is empty".to_string(),
        });
      }

      for dep in &node.deps {
        if !self.nodes.contains_key(dep) {
          return Err(WorkflowError::UnknownDependency {
            node_id: node.id.clone(),
            dependency: dep.clone(),
          });
        }
      }

      if let Some(missing) = node
        .artifact_names()
        .find(|name| !self.artifacts.contains_key(*name))
      {
        return Err(WorkflowError::UnknownArtifact {
          node_id: node.id.clone(),
          artifact: missing.to_string(),
        });
      }
    }

    Ok(())
  }
}
