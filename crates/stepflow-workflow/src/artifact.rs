use serde::{Deserialize, Serialize};

/// A named data product flowing between nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
  pub name: String,
  /// Absolute path, `scheme://` location, or path relative to the run workspace.
  pub uri: String,
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub artifact_type: Option<String>,
}

impl ArtifactRef {
  pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      uri: uri.into(),
      artifact_type: None,
    }
  }

  pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
    self.artifact_type = Some(artifact_type.into());
    self
  }
}
