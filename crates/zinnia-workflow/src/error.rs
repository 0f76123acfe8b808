use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
  #[error("host serialization returned no 'output' graph")]
  MissingOutput,

  #[error("graph output is not a JSON object")]
  NotAnObject,

  #[error("failed to render graph JSON: {0}")]
  Render(#[from] serde_json::Error),
}
