use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactConfig;
use crate::step::StepConfig;

/// A workflow definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
  pub name: String,

  /// Steps keyed by step id, in document order.
  pub steps: IndexMap<String, StepConfig>,

  /// Artifacts declared up front. Outputs not listed here get a default location.
  #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
  pub artifacts: IndexMap<String, ArtifactConfig>,
}

/// The on-disk document: the workflow lives under a top-level `workflow` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
  pub workflow: WorkflowConfig,
}

impl WorkflowConfig {
  /// Parse a workflow document from JSON text.
  pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
    let document: WorkflowDocument = serde_json::from_str(content)?;
    Ok(document.workflow)
  }

  /// Parse a workflow document from an already decoded JSON value.
  pub fn from_json_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
    let document: WorkflowDocument = serde_json::from_value(value)?;
    Ok(document.workflow)
  }
}
