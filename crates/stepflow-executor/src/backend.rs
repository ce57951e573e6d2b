use std::path::Path;

use async_trait::async_trait;
use indexmap::IndexMap;
use stepflow_workflow::GraphIR;

use crate::error::ExecutionError;

/// Artifact name to resolved location, in artifact declaration order.
pub type ArtifactLocations = IndexMap<String, String>;

/// Something that can execute a whole graph.
///
/// [`LocalBackend`](crate::LocalBackend) runs nodes in-process, one after
/// another. Other backends implement the same contract: same input, same
/// result on success, same error taxonomy.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
  /// Execute every node of `graph` with relative artifact locations rooted
  /// at `workspace`, returning the location of every artifact.
  async fn run(
    &self,
    graph: &GraphIR,
    workspace: &Path,
  ) -> Result<ArtifactLocations, ExecutionError>;
}
