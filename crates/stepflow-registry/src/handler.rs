use async_trait::async_trait;
use stepflow_workflow::NodeIR;

use crate::context::ExecutionContext;

/// Error raised by a handler. Passed through to the caller of the run untouched.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Optional auxiliary result of a handler, e.g. a summary record.
///
/// The engine only reports it; it never feeds it to other nodes.
pub type StepOutput = Option<serde_json::Value>;

/// Executes nodes of one kind.
///
/// A handler is responsible for all I/O needed to produce the node's
/// `outputs` at `ctx.location(name)`, including creating parent
/// directories. `params` and `resources` are validated by the handler
/// itself; their shape is specific to each kind.
#[async_trait]
pub trait StepHandler: Send + Sync {
  async fn execute(
    &self,
    node: &NodeIR,
    ctx: &ExecutionContext,
  ) -> Result<StepOutput, HandlerError>;
}
