//! Artifact location resolution.

use std::path::Path;

use stepflow_workflow::GraphIR;

use crate::backend::ArtifactLocations;

/// Turn an artifact `uri` into the location handlers use for one run.
///
/// Scheme-qualified locations (`s3://...`) and absolute paths are returned
/// unchanged; anything else is joined onto `workspace`.
pub fn resolve_location(uri: &str, workspace: &Path) -> String {
  if uri.contains("://") || Path::new(uri).is_absolute() {
    uri.to_string()
  } else {
    workspace.join(uri).to_string_lossy().into_owned()
  }
}

/// Resolve every artifact of `graph`, in declaration order.
pub fn resolve_artifacts(graph: &GraphIR, workspace: &Path) -> ArtifactLocations {
  graph
    .artifacts
    .iter()
    .map(|(name, artifact)| (name.clone(), resolve_location(&artifact.uri, workspace)))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use stepflow_workflow::{ArtifactRef, NodeIR};

  #[test]
  fn test_relative_uri_joins_workspace() {
    assert_eq!(
      resolve_location("out.json", Path::new("/tmp/run1")),
      "/tmp/run1/out.json"
    );
    assert_eq!(
      resolve_location("workdir/hists.pkl", Path::new("/tmp/run1")),
      "/tmp/run1/workdir/hists.pkl"
    );
  }

  #[test]
  fn test_remote_uri_is_unchanged() {
    assert_eq!(
      resolve_location("s3://bucket/key", Path::new("/tmp/run1")),
      "s3://bucket/key"
    );
    assert_eq!(
      resolve_location("root://eos.cern.ch//store/file.root", Path::new("/tmp/run1")),
      "root://eos.cern.ch//store/file.root"
    );
  }

  #[cfg(unix)]
  #[test]
  fn test_absolute_path_is_unchanged() {
    assert_eq!(
      resolve_location("/data/input.parquet", Path::new("/tmp/run1")),
      "/data/input.parquet"
    );
  }

  #[test]
  fn test_resolution_is_idempotent() {
    let workspace = Path::new("/tmp/run1");
    let first = resolve_location("nested/out.json", workspace);
    let second = resolve_location("nested/out.json", workspace);
    assert_eq!(first, second);
  }

  #[test]
  fn test_resolve_artifacts_covers_whole_graph() {
    let graph = GraphIR::new(
      "g",
      [NodeIR::new("a", "emit").with_outputs(["local"])],
      [
        ArtifactRef::new("local", "local.json"),
        ArtifactRef::new("remote", "s3://bucket/remote"),
        ArtifactRef::new("unused", "unused.txt"),
      ],
    );

    let resolved = resolve_artifacts(&graph, Path::new("/ws"));
    assert_eq!(resolved.keys().collect::<Vec<_>>(), vec!["local", "remote", "unused"]);
    assert_eq!(resolved["local"], "/ws/local.json");
    assert_eq!(resolved["remote"], "s3://bucket/remote");
    assert_eq!(resolved, resolve_artifacts(&graph, Path::new("/ws")));
  }
}
