use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single step as written in the workflow document.
///
/// The step id is the key under which the step appears in
/// [`WorkflowConfig::steps`](crate::WorkflowConfig::steps).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
  /// Handler kind, e.g. "copy".
  pub kind: String,

  /// Steps that must finish before this one starts.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub depends_on: Vec<String>,

  /// Artifact names read by the step.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub inputs: Vec<String>,

  /// Artifact names produced by the step.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub outputs: Vec<String>,

  /// Handler specific settings.
  #[serde(default, skip_serializing_if = "Map::is_empty")]
  pub params: Map<String, Value>,

  /// Execution resources (executor, worker counts, ...). Read only by handlers.
  #[serde(default, skip_serializing_if = "Map::is_empty")]
  pub resources: Map<String, Value>,

  /// Free-form annotations carried through to the graph untouched.
  #[serde(default, skip_serializing_if = "Map::is_empty")]
  pub meta: Map<String, Value>,
}
