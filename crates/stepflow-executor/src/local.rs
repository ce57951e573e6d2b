//! In-process, sequential execution backend.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use stepflow_registry::{ExecutionContext, RegistryError, StepRegistry};
use stepflow_workflow::{GraphIR, NodeIR};
use tracing::{error, info, instrument};

use crate::backend::{ArtifactLocations, ExecutionBackend};
use crate::error::ExecutionError;
use crate::events::{ExecutionEvent, ExecutionNotifier, NoopNotifier};
use crate::plan::plan;

/// Runs every node in the current process, one at a time.
///
/// Holds the registry by shared reference only; handlers must be registered
/// before the backend is built. A backend keeps no state between runs, so the
/// same backend and graph can be run repeatedly against different workspaces.
pub struct LocalBackend {
  registry: Arc<StepRegistry>,
  notifier: Arc<dyn ExecutionNotifier>,
}

impl LocalBackend {
  pub fn new(registry: Arc<StepRegistry>) -> Self {
    Self {
      registry,
      notifier: Arc::new(NoopNotifier),
    }
  }

  /// Report progress events to `notifier` in addition to the tracing log.
  pub fn with_notifier(mut self, notifier: Arc<dyn ExecutionNotifier>) -> Self {
    self.notifier = notifier;
    self
  }

  pub fn registry(&self) -> &StepRegistry {
    &self.registry
  }

  async fn run_nodes(
    &self,
    graph: &GraphIR,
    workspace: &Path,
    run_id: &str,
  ) -> Result<ArtifactLocations, ExecutionError> {
    tokio::fs::create_dir_all(workspace)
      .await
      .map_err(|source| ExecutionError::Workspace {
        path: workspace.to_path_buf(),
        source,
      })?;

    let plan = plan(graph, workspace)?;
    let ctx = ExecutionContext::new(run_id, workspace, plan.artifacts);

    for node_id in &plan.order {
      let node = &graph.nodes[node_id.as_str()];
      self.run_node(node, &ctx).await?;
    }

    Ok(ctx.into_artifacts())
  }

  async fn run_node(&self, node: &NodeIR, ctx: &ExecutionContext) -> Result<(), ExecutionError> {
    let inputs = locate(&node.inputs, ctx);
    let outputs = locate(&node.outputs, ctx);

    info!(
      run_id = %ctx.run_id(),
      node_id = %node.id,
      kind = %node.kind,
      deps = ?node.deps,
      inputs = ?inputs,
      outputs = ?outputs,
      "node_started"
    );
    self.notifier.notify(ExecutionEvent::NodeStarted {
      run_id: ctx.run_id().to_string(),
      node_id: node.id.clone(),
      kind: node.kind.clone(),
      deps: node.deps.clone(),
      inputs,
      outputs,
    });

    let started = Instant::now();

    let result = match self.registry.get_handler(&node.kind) {
      Ok(handler) => handler
        .execute(node, ctx)
        .await
        .map_err(|source| ExecutionError::HandlerExecution {
          node_id: node.id.clone(),
          kind: node.kind.clone(),
          source,
        }),
      Err(RegistryError::HandlerNotFound { kind }) => Err(ExecutionError::HandlerNotFound {
        node_id: node.id.clone(),
        kind,
      }),
    };

    let elapsed_ms = elapsed_ms(started);

    match result {
      Ok(output) => {
        info!(
          run_id = %ctx.run_id(),
          node_id = %node.id,
          elapsed_ms,
          result = ?output,
          "node_completed"
        );
        self.notifier.notify(ExecutionEvent::NodeCompleted {
          run_id: ctx.run_id().to_string(),
          node_id: node.id.clone(),
          elapsed_ms,
          result: output,
        });
        Ok(())
      }
      Err(e) => {
        error!(
          run_id = %ctx.run_id(),
          node_id = %node.id,
          kind = %node.kind,
          elapsed_ms,
          error = %e,
          "node_failed"
        );
        self.notifier.notify(ExecutionEvent::NodeFailed {
          run_id: ctx.run_id().to_string(),
          node_id: node.id.clone(),
          error: e.to_string(),
        });
        Err(e)
      }
    }
  }
}

#[async_trait]
impl ExecutionBackend for LocalBackend {
  #[instrument(
    name = "workflow_run",
    skip(self, graph, workspace),
    fields(workflow = %graph.name)
  )]
  async fn run(
    &self,
    graph: &GraphIR,
    workspace: &Path,
  ) -> Result<ArtifactLocations, ExecutionError> {
    let run_id = uuid::Uuid::new_v4().to_string();
    let started = Instant::now();

    info!(
      run_id = %run_id,
      workspace = %workspace.display(),
      nodes = graph.nodes.len(),
      artifacts = graph.artifacts.len(),
      "run_started"
    );
    self.notifier.notify(ExecutionEvent::RunStarted {
      run_id: run_id.clone(),
      workflow: graph.name.clone(),
      workspace: workspace.display().to_string(),
    });

    let result = self.run_nodes(graph, workspace, &run_id).await;
    let elapsed_ms = elapsed_ms(started);

    match &result {
      Ok(_) => {
        info!(run_id = %run_id, elapsed_ms, "run_completed");
        self.notifier.notify(ExecutionEvent::RunCompleted {
          run_id: run_id.clone(),
          elapsed_ms,
        });
      }
      Err(e) => {
        error!(run_id = %run_id, elapsed_ms, error = %e, "run_failed");
        self.notifier.notify(ExecutionEvent::RunFailed {
          run_id: run_id.clone(),
          error: e.to_string(),
        });
      }
    }

    result
  }
}

fn elapsed_ms(started: Instant) -> u64 {
  u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Pair each artifact name with its resolved location.
fn locate(names: &[String], ctx: &ExecutionContext) -> Vec<(String, String)> {
  names
    .iter()
    .map(|name| {
      let location = ctx.location(name).unwrap_or_default().to_string();
      (name.clone(), location)
    })
    .collect()
}
