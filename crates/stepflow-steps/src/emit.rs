use async_trait::async_trait;
use serde_json::{Value, json};
use stepflow_registry::{ExecutionContext, HandlerError, StepHandler, StepOutput};
use stepflow_workflow::NodeIR;
use tracing::debug;

use crate::fs::{local_path, write_output};

/// Writes `params.value` as pretty JSON to every output.
///
/// Without a `value` key the whole `params` map is written.
#[derive(Debug, Clone, Default)]
pub struct EmitHandler;

#[async_trait]
impl StepHandler for EmitHandler {
  async fn execute(
    &self,
    node: &NodeIR,
    ctx: &ExecutionContext,
  ) -> Result<StepOutput, HandlerError> {
    let value = node
      .params
      .get("value")
      .cloned()
      .unwrap_or_else(|| Value::Object(node.params.clone()));
    let mut body = serde_json::to_vec_pretty(&value).map_err(crate::StepError::from)?;
    body.push(b'\n');

    let mut written = Vec::with_capacity(node.outputs.len());
    for index in 0..node.outputs.len() {
      let path = local_path(&node.id, ctx.output_location(node, index)?)?;
      write_output(&path, &body).await?;
      debug!(node_id = %node.id, path = %path.display(), bytes = body.len(), "emitted");
      written.push(path.display().to_string());
    }

    Ok(Some(json!({ "written": written })))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use indexmap::IndexMap;

  fn ctx(dir: &std::path::Path) -> ExecutionContext {
    let mut artifacts = IndexMap::new();
    artifacts.insert("a".to_string(), dir.join("a.json").display().to_string());
    artifacts.insert("b".to_string(), dir.join("deep/b.json").display().to_string());
    artifacts.insert("remote".to_string(), "s3://bucket/key".to_string());
    ExecutionContext::new("run", dir, artifacts)
  }

  #[tokio::test]
  async fn test_emit_value_to_every_output() {
    let temp = tempfile::tempdir().unwrap();
    let node = NodeIR::new("seed", "emit")
      .with_outputs(["a", "b"])
      .with_param("value", json!({ "rows": 3 }));

    let output = EmitHandler.execute(&node, &ctx(temp.path())).await.unwrap();

    for file in ["a.json", "deep/b.json"] {
      let content = std::fs::read_to_string(temp.path().join(file)).unwrap();
      let parsed: Value = serde_json::from_str(&content).unwrap();
      assert_eq!(parsed, json!({ "rows": 3 }));
    }
    assert_eq!(output.unwrap()["written"].as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn test_emit_whole_params_without_value() {
    let temp = tempfile::tempdir().unwrap();
    let node = NodeIR::new("seed", "emit")
      .with_outputs(["a"])
      .with_param("chunksize", json!(100));

    EmitHandler.execute(&node, &ctx(temp.path())).await.unwrap();

    let content = std::fs::read_to_string(temp.path().join("a.json")).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, json!({ "chunksize": 100 }));
  }

  #[tokio::test]
  async fn test_emit_rejects_remote_output() {
    let temp = tempfile::tempdir().unwrap();
    let node = NodeIR::new("seed", "emit").with_outputs(["remote"]);

    let err = EmitHandler
      .execute(&node, &ctx(temp.path()))
      .await
      .unwrap_err();
    assert!(err.to_string().contains("not a local path"));
  }
}
