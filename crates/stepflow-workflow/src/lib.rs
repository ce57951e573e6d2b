//! Stepflow Workflow
//!
//! This crate provides the graph intermediate representation (IR) that the
//! execution backends consume.
//!
//! Key differences from `stepflow-config`:
//! - Every output artifact has a location (undeclared outputs get a default one)
//! - Artifact and dependency references are validated
//! - Node ids, dependencies and artifact names are the only things the core reads;
//!   `params`, `resources` and `meta` stay opaque
//!
//! A [`GraphIR`] is never mutated by execution. Backends derive their
//! per-run state (resolved locations, execution order) from a shared borrow.

mod artifact;
mod builder;
mod error;
mod graph;
mod node;
mod order;

pub use artifact::ArtifactRef;
pub use builder::DEFAULT_ARTIFACT_DIR;
pub use error::{OrderError, WorkflowError};
pub use graph::GraphIR;
pub use node::NodeIR;
pub use order::topological_order;
