use async_trait::async_trait;
use serde_json::json;
use stepflow_registry::{ExecutionContext, HandlerError, StepHandler, StepOutput};
use stepflow_workflow::NodeIR;
use tracing::debug;

use crate::error::StepError;
use crate::fs::{local_path, read_input, write_output};

/// Copies input *i* to output *i*.
#[derive(Debug, Clone, Default)]
pub struct CopyHandler;

#[async_trait]
impl StepHandler for CopyHandler {
  async fn execute(
    &self,
    node: &NodeIR,
    ctx: &ExecutionContext,
  ) -> Result<StepOutput, HandlerError> {
    if node.inputs.len() != node.outputs.len() {
      return Err(
        StepError::Arity {
          node_id: node.id.clone(),
          expected: "as many outputs as inputs",
          inputs: node.inputs.len(),
          outputs: node.outputs.len(),
        }
        .into(),
      );
    }

    let mut written = Vec::with_capacity(node.outputs.len());
    for index in 0..node.inputs.len() {
      let from = local_path(&node.id, ctx.input_location(node, index)?)?;
      let to = local_path(&node.id, ctx.output_location(node, index)?)?;

      let data = read_input(&node.id, &from).await?;
      write_output(&to, &data).await?;

      debug!(
        node_id = %node.id,
        from = %from.display(),
        to = %to.display(),
        bytes = data.len(),
        "copied"
      );
      written.push(to.display().to_string());
    }

    Ok(Some(json!({ "written": written })))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use indexmap::IndexMap;
  use std::path::Path;

  fn ctx(dir: &Path) -> ExecutionContext {
    let mut artifacts = IndexMap::new();
    for name in ["in1", "in2", "out1", "out2"] {
      artifacts.insert(name.to_string(), dir.join(name).display().to_string());
    }
    ExecutionContext::new("run", dir, artifacts)
  }

  #[tokio::test]
  async fn test_copy_pairs_inputs_with_outputs() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("in1"), "one").unwrap();
    std::fs::write(temp.path().join("in2"), "two").unwrap();

    let node = NodeIR::new("dup", "copy")
      .with_inputs(["in1", "in2"])
      .with_outputs(["out1", "out2"]);
    CopyHandler.execute(&node, &ctx(temp.path())).await.unwrap();

    assert_eq!(std::fs::read_to_string(temp.path().join("out1")).unwrap(), "one");
    assert_eq!(std::fs::read_to_string(temp.path().join("out2")).unwrap(), "two");
  }

  #[tokio::test]
  async fn test_copy_requires_matching_arity() {
    let temp = tempfile::tempdir().unwrap();
    let node = NodeIR::new("dup", "copy")
      .with_inputs(["in1", "in2"])
      .with_outputs(["out1"]);

    let err = CopyHandler
      .execute(&node, &ctx(temp.path()))
      .await
      .unwrap_err();
    assert!(err.downcast_ref::<StepError>().is_some());
    assert!(err.to_string().contains("2 input(s) and 1 output(s)"));
  }

  #[tokio::test]
  async fn test_copy_reports_missing_input() {
    let temp = tempfile::tempdir().unwrap();
    let node = NodeIR::new("dup", "copy")
      .with_inputs(["in1"])
      .with_outputs(["out1"]);

    let err = CopyHandler
      .execute(&node, &ctx(temp.path()))
      .await
      .unwrap_err();
    assert!(matches!(
      err.downcast_ref::<StepError>(),
      Some(StepError::MissingInput { .. })
    ));
    assert!(!temp.path().join("out1").exists());
  }
}
