//! Execution events and notifiers for observability.
//!
//! Events are emitted while a run progresses so callers can display
//! progress, persist history, or assert on ordering in tests. Notifiers are
//! observers only: nothing they do changes how the run proceeds.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExecutionEvent {
  /// The run has started.
  RunStarted {
    run_id: String,
    workflow: String,
    workspace: String,
  },

  /// A node is about to be invoked.
  NodeStarted {
    run_id: String,
    node_id: String,
    kind: String,
    deps: Vec<String>,
    /// `(artifact name, resolved location)` pairs.
    inputs: Vec<(String, String)>,
    outputs: Vec<(String, String)>,
  },

  /// A node finished successfully.
  NodeCompleted {
    run_id: String,
    node_id: String,
    elapsed_ms: u64,
    result: Option<serde_json::Value>,
  },

  /// A node failed; the run stops here.
  NodeFailed {
    run_id: String,
    node_id: String,
    error: String,
  },

  /// Every node completed.
  RunCompleted { run_id: String, elapsed_ms: u64 },

  /// The run was aborted.
  RunFailed { run_id: String, error: String },
}

/// Trait for receiving execution events.
pub trait ExecutionNotifier: Send + Sync {
  /// Called when an execution event occurs.
  fn notify(&self, event: ExecutionEvent);
}

/// A no-op notifier that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl ExecutionNotifier for NoopNotifier {
  fn notify(&self, _event: ExecutionEvent) {}
}

/// A notifier that forwards events to an unbounded channel.
///
/// Unbounded so a slow consumer never holds up the run; volume is a handful
/// of events per node.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<ExecutionEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<ExecutionEvent>) -> Self {
    Self { sender }
  }

  /// Create a notifier together with the receiving end of its channel.
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<ExecutionEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Self::new(sender), receiver)
  }
}

impl ExecutionNotifier for ChannelNotifier {
  fn notify(&self, event: ExecutionEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
