//! Stepflow Executor
//!
//! Runs a [`GraphIR`](stepflow_workflow::GraphIR) against a workspace.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       LocalBackend                          │
//! │  - create workspace                                         │
//! │  - resolve artifact locations (relative → workspace)        │
//! │  - order nodes (deterministic Kahn)                         │
//! │  - dispatch each node to its StepHandler, one at a time     │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       StepRegistry                          │
//! │  - kind → StepHandler                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use stepflow_executor::{ExecutionBackend, LocalBackend};
//! use stepflow_registry::StepRegistry;
//!
//! let mut registry = StepRegistry::new();
//! registry.register("copy", CopyHandler);
//!
//! let backend = LocalBackend::new(Arc::new(registry));
//! let artifacts = backend.run(&graph, Path::new("/tmp/run1")).await?;
//! ```
//!
//! Execution is strictly sequential: a node's handler runs to completion
//! before the next node starts, so writer-before-reader ordering of artifacts
//! follows from the topological order alone. The first failure aborts the
//! run; outputs already written by earlier nodes stay where they are.

mod backend;
mod error;
mod events;
mod local;
mod plan;
mod resolve;

pub use backend::{ArtifactLocations, ExecutionBackend};
pub use error::ExecutionError;
pub use events::{ChannelNotifier, ExecutionEvent, ExecutionNotifier, NoopNotifier};
pub use local::LocalBackend;
pub use plan::{Plan, plan};
pub use resolve::{resolve_artifacts, resolve_location};
