use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A step in the workflow graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeIR {
  pub id: String,
  /// Registry key selecting the handler that executes this node.
  pub kind: String,
  /// Node ids that must complete before this node starts. Ordering only.
  #[serde(default)]
  pub deps: Vec<String>,
  #[serde(default)]
  pub inputs: Vec<String>,
  #[serde(default)]
  pub outputs: Vec<String>,
  #[serde(default)]
  pub params: Map<String, Value>,
  #[serde(default)]
  pub resources: Map<String, Value>,
  #[serde(default)]
  pub meta: Map<String, Value>,
}

impl NodeIR {
  pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      kind: kind.into(),
      ..Default::default()
    }
  }

  pub fn with_deps<I, S>(mut self, deps: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.deps = deps.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.inputs = inputs.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.outputs = outputs.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
    self.params.insert(key.into(), value);
    self
  }

  /// All artifact names this node touches, inputs first.
  pub fn artifact_names(&self) -> impl Iterator<Item = &str> {
    self
      .inputs
      .iter()
      .chain(self.outputs.iter())
      .map(String::as_str)
  }
}
