use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::error::HostError;

/// Destination for JSON documents saved on the user's machine.
///
/// The editor offers serialized graphs as a file download; outside a browser
/// the equivalent is a write into a local directory.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
  /// Persist `value` under `name`, pretty-printed. Returns the final path.
  async fn save_json(&self, name: &str, value: &Value) -> Result<PathBuf, HostError>;
}

/// Filesystem-based artifact sink.
///
/// Artifacts are written to `{base_path}/{name}`. Parent directories are
/// created automatically.
pub struct FsArtifactSink {
  base_path: PathBuf,
}

impl FsArtifactSink {
  /// Create a new filesystem sink with the given base path.
  pub fn new(base_path: impl Into<PathBuf>) -> Self {
    Self {
      base_path: base_path.into(),
    }
  }

  /// Get the base directory of the sink.
  pub fn base_path(&self) -> &Path {
    &self.base_path
  }
}

#[async_trait]
impl ArtifactSink for FsArtifactSink {
  async fn save_json(&self, name: &str, value: &Value) -> Result<PathBuf, HostError> {
    let path = self.base_path.join(name);

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).await?;
    }

    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(&path, rendered).await?;

    Ok(path)
  }
}
