//! Translation of a [`WorkflowConfig`] into a [`GraphIR`].

use stepflow_config::WorkflowConfig;

use crate::artifact::ArtifactRef;
use crate::error::WorkflowError;
use crate::graph::GraphIR;
use crate::node::NodeIR;

/// Workspace-relative directory for outputs that were not declared up front.
pub const DEFAULT_ARTIFACT_DIR: &str = "workdir";

impl GraphIR {
  /// Build a validated graph from a workflow configuration.
  ///
  /// Declared artifacts come first, in document order. Any step output
  /// without a declaration gets `workdir/<name>` as its location, added in
  /// step order. Unknown inputs and dependencies are rejected; cycles are
  /// caught later by ordering.
  pub fn from_config(config: WorkflowConfig) -> Result<Self, WorkflowError> {
    let mut graph = GraphIR {
      name: config.name,
      ..Default::default()
    };

    for (name, artifact) in config.artifacts {
      graph.artifacts.insert(
        name.clone(),
        ArtifactRef {
          name,
          uri: artifact.uri,
          artifact_type: artifact.artifact_type,
        },
      );
    }

    for (step_id, step) in config.steps {
      for output in &step.outputs {
        if !graph.artifacts.contains_key(output) {
          graph
            .artifacts
            .insert(output.clone(), default_artifact(output));
        }
      }

      graph.nodes.insert(
        step_id.clone(),
        NodeIR {
          id: step_id,
          kind: step.kind,
          deps: step.depends_on,
          inputs: step.inputs,
          outputs: step.outputs,
          params: step.params,
          resources: step.resources,
          meta: step.meta,
        },
      );
    }

    graph.validate()?;
    Ok(graph)
  }
}

fn default_artifact(name: &str) -> ArtifactRef {
  ArtifactRef::new(name, format!("{}/{}", DEFAULT_ARTIFACT_DIR, name))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn config(value: serde_json::Value) -> WorkflowConfig {
    WorkflowConfig::from_json_value(value).unwrap()
  }

  #[test]
  fn test_builds_nodes_in_document_order() {
    let graph = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "analysis",
        "steps": {
          "partition": { "kind": "partition", "outputs": ["parts"], "params": { "chunksize": 10 } },
          "run": {
            "kind": "process",
            "depends_on": ["partition"],
            "inputs": ["parts"],
            "outputs": ["hists"],
            "resources": { "executor": "local" }
          }
        }
      }
    })))
    .unwrap();

    assert_eq!(graph.name, "analysis");
    assert_eq!(
      graph.nodes.keys().collect::<Vec<_>>(),
      vec!["partition", "run"]
    );

    let run = graph.get_node("run").unwrap();
    assert_eq!(run.kind, "process");
    assert_eq!(run.deps, vec!["partition"]);
    assert_eq!(run.inputs, vec!["parts"]);
    assert_eq!(run.resources["executor"], json!("local"));
    assert_eq!(
      graph.get_node("partition").unwrap().params["chunksize"],
      json!(10)
    );
  }

  #[test]
  fn test_independent_steps_run_in_document_order() {
    let graph = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "tie-break",
        "steps": {
          "zeta": { "kind": "emit", "outputs": ["z"] },
          "alpha": { "kind": "emit", "outputs": ["a"] },
          "merge": { "kind": "concat", "depends_on": ["zeta", "alpha"], "inputs": ["a", "z"] }
        }
      }
    })))
    .unwrap();

    assert_eq!(
      graph.nodes.keys().collect::<Vec<_>>(),
      vec!["zeta", "alpha", "merge"]
    );
    assert_eq!(graph.artifacts.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    assert_eq!(graph.execution_order().unwrap(), vec!["zeta", "alpha", "merge"]);
  }

  #[test]
  fn test_undeclared_outputs_get_default_location() {
    let graph = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "defaults",
        "steps": { "a": { "kind": "emit", "outputs": ["result.json"] } }
      }
    })))
    .unwrap();

    let artifact = graph.get_artifact("result.json").unwrap();
    assert_eq!(artifact.uri, "workdir/result.json");
    assert_eq!(artifact.artifact_type, None);
  }

  #[test]
  fn test_declared_artifacts_are_kept() {
    let graph = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "declared",
        "artifacts": {
          "out": { "uri": "s3://bucket/out", "type": "json" },
          "unused": { "uri": "/abs/unused" }
        },
        "steps": { "a": { "kind": "emit", "outputs": ["out"] } }
      }
    })))
    .unwrap();

    let out = graph.get_artifact("out").unwrap();
    assert_eq!(out, &ArtifactRef::new("out", "s3://bucket/out").with_type("json"));
    assert_eq!(
      graph.artifacts.keys().collect::<Vec<_>>(),
      vec!["out", "unused"]
    );
  }

  #[test]
  fn test_input_produced_by_later_step_resolves() {
    let graph = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "forward",
        "steps": {
          "consume": { "kind": "copy", "depends_on": ["produce"], "inputs": ["x"], "outputs": ["y"] },
          "produce": { "kind": "emit", "outputs": ["x"] }
        }
      }
    })))
    .unwrap();

    assert_eq!(graph.execution_order().unwrap(), vec!["produce", "consume"]);
  }

  #[test]
  fn test_unknown_input_is_rejected() {
    let err = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "bad",
        "steps": { "a": { "kind": "copy", "inputs": ["nowhere"] } }
      }
    })))
    .unwrap_err();

    assert!(matches!(
      err,
      WorkflowError::UnknownArtifact { ref artifact, .. } if artifact == "nowhere"
    ));
  }

  #[test]
  fn test_unknown_dependency_is_rejected() {
    let err = GraphIR::from_config(config(json!({
      "workflow": {
        "name": "bad",
        "steps": { "a": { "kind": "emit", "depends_on": ["ghost"] } }
      }
    })))
    .unwrap_err();

    assert_eq!(err.to_string(), "node 'a' depends on unknown node 'ghost'");
  }

  #[test]
  fn test_empty_kind_is_rejected() {
    let err = GraphIR::from_config(config(json!({
      "workflow": { "name": "bad", "steps": { "a": { "kind": "" } } }
    })))
    .unwrap_err();

    assert!(matches!(err, WorkflowError::InvalidNode { .. }));
  }
}
