use serde::{Deserialize, Serialize};

/// A pre-declared artifact location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactConfig {
  /// Absolute path, `scheme://` location, or path relative to the run workspace.
  pub uri: String,

  /// Free-form type tag, e.g. "parquet". Not interpreted by the engine.
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub artifact_type: Option<String>,
}
