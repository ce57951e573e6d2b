use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::StepError;

/// Reject remote locations; the built-in handlers only work on local files.
pub(crate) fn local_path(node_id: &str, location: &str) -> Result<PathBuf, StepError> {
  if location.contains("://") {
    return Err(StepError::RemoteLocation {
      node_id: node_id.to_string(),
      location: location.to_string(),
    });
  }
  Ok(PathBuf::from(location))
}

/// Read a whole input file.
pub(crate) async fn read_input(node_id: &str, path: &Path) -> Result<Vec<u8>, StepError> {
  fs::read(path).await.map_err(|e| {
    if e.kind() == std::io::ErrorKind::NotFound {
      StepError::MissingInput {
        node_id: node_id.to_string(),
        location: path.display().to_string(),
      }
    } else {
      StepError::Io {
        location: path.display().to_string(),
        source: e,
      }
    }
  })
}

/// Write `data` to `path`, creating parent directories first.
pub(crate) async fn write_output(path: &Path, data: &[u8]) -> Result<(), StepError> {
  let io_err = |source| StepError::Io {
    location: path.display().to_string(),
    source,
  };

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).await.map_err(io_err)?;
  }
  fs::write(path, data).await.map_err(io_err)
}
