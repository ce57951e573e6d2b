//! Stepflow Config
//!
//! This crate contains the serializable workflow configuration types for stepflow.
//! These types describe a workflow as the user writes it, before it is turned
//! into a graph IR by `stepflow-workflow`.
//!
//! A workflow document is JSON with a single top-level `workflow` key:
//!
//! ```json
//! {
//!   "workflow": {
//!     "name": "example",
//!     "artifacts": { "raw": { "uri": "data/raw.json" } },
//!     "steps": {
//!       "fetch": { "kind": "emit", "outputs": ["raw"] },
//!       "clean": { "kind": "copy", "depends_on": ["fetch"], "inputs": ["raw"], "outputs": ["clean"] }
//!     }
//!   }
//! }
//! ```
//!
//! Steps and artifacts keep the order they are written in. That order is the
//! declaration order the engine uses to break ties between independent steps.

mod artifact;
mod step;
mod workflow;

pub use artifact::ArtifactConfig;
pub use step::StepConfig;
pub use workflow::{WorkflowConfig, WorkflowDocument};
