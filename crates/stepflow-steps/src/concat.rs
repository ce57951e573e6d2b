use async_trait::async_trait;
use serde_json::json;
use stepflow_registry::{ExecutionContext, HandlerError, StepHandler, StepOutput};
use stepflow_workflow::NodeIR;
use tracing::debug;

use crate::error::StepError;
use crate::fs::{local_path, read_input, write_output};

/// Concatenates every input, in order, into each output.
#[derive(Debug, Clone, Default)]
pub struct ConcatHandler;

#[async_trait]
impl StepHandler for ConcatHandler {
  async fn execute(
    &self,
    node: &NodeIR,
    ctx: &ExecutionContext,
  ) -> Result<StepOutput, HandlerError> {
    if node.inputs.is_empty() || node.outputs.is_empty() {
      return Err(
        StepError::Arity {
          node_id: node.id.clone(),
          expected: "at least one input and one output",
          inputs: node.inputs.len(),
          outputs: node.outputs.len(),
        }
        .into(),
      );
    }

    let mut merged = Vec::new();
    for index in 0..node.inputs.len() {
      let path = local_path(&node.id, ctx.input_location(node, index)?)?;
      merged.extend(read_input(&node.id, &path).await?);
    }

    let mut written = Vec::with_capacity(node.outputs.len());
    for index in 0..node.outputs.len() {
      let path = local_path(&node.id, ctx.output_location(node, index)?)?;
      write_output(&path, &merged).await?;
      written.push(path.display().to_string());
    }

    debug!(node_id = %node.id, inputs = node.inputs.len(), bytes = merged.len(), "concatenated");
    Ok(Some(json!({ "written": written, "bytes": merged.len() })))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use indexmap::IndexMap;

  #[tokio::test]
  async fn test_concat_in_input_order() {
    let temp = tempfile::tempdir().unwrap();
    let mut artifacts = IndexMap::new();
    for name in ["a", "b", "merged"] {
      artifacts.insert(name.to_string(), temp.path().join(name).display().to_string());
    }
    let ctx = ExecutionContext::new("run", temp.path(), artifacts);
    std::fs::write(temp.path().join("a"), "first\n").unwrap();
    std::fs::write(temp.path().join("b"), "second\n").unwrap();

    let node = NodeIR::new("merge", "concat")
      .with_inputs(["b", "a"])
      .with_outputs(["merged"]);
    let output = ConcatHandler.execute(&node, &ctx).await.unwrap().unwrap();

    assert_eq!(
      std::fs::read_to_string(temp.path().join("merged")).unwrap(),
      "second\nfirst\n"
    );
    assert_eq!(output["bytes"], 13);
  }

  #[tokio::test]
  async fn test_concat_without_inputs_fails() {
    let temp = tempfile::tempdir().unwrap();
    let ctx = ExecutionContext::new("run", temp.path(), IndexMap::new());
    let node = NodeIR::new("merge", "concat").with_outputs(["merged"]);

    assert!(ConcatHandler.execute(&node, &ctx).await.is_err());
  }
}
