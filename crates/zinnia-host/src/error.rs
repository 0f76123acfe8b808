use thiserror::Error;
use zinnia_workflow::SnapshotError;

/// Errors that can occur at the host boundary.
#[derive(Debug, Error)]
pub enum HostError {
  /// The editor could not serialize its current graph.
  #[error("graph unavailable: {message}")]
  GraphUnavailable { message: String },

  /// The serialized graph did not have the expected shape.
  #[error("bad graph snapshot: {0}")]
  Snapshot(#[from] SnapshotError),

  /// Writing an artifact to disk failed.
  #[error("artifact write failed: {0}")]
  Io(#[from] std::io::Error),

  /// An artifact value could not be rendered as JSON.
  #[error("artifact render failed: {0}")]
  Render(#[from] serde_json::Error),

  /// An extension's setup hook failed.
  #[error("extension setup failed: {message}")]
  Setup { message: String },
}

impl HostError {
  /// Create a graph-unavailable error.
  pub fn graph_unavailable(message: impl Into<String>) -> Self {
    Self::GraphUnavailable {
      message: message.into(),
    }
  }

  /// Create an extension setup error.
  pub fn setup(message: impl Into<String>) -> Self {
    Self::Setup {
      message: message.into(),
    }
  }
}
