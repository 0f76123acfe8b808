use std::sync::Mutex;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use zinnia_api::{ApiError, DeployApi};

/// Text a projection renders in place of the list while the registry is
/// empty.
pub const EMPTY_PLACEHOLDER: &str = "No models detected";

/// Non-path rows a projection may render transiently. These must never end
/// up in a deployment request.
const STATUS_TEXTS: &[&str] = &[EMPTY_PLACEHOLDER, "Validating path..."];

#[derive(Debug, Error)]
pub enum RegistryError {
  /// The backend accepted the path but found no models under it.
  #[error("no models found for this path")]
  NoModelsFound,

  /// The backend rejected the path.
  #[error("{0}")]
  PathRejected(String),

  #[error(transparent)]
  Api(#[from] ApiError),
}

/// The ordered, deduplicated list of model paths attached to a deployment.
///
/// This registry is the source of truth - any rendered list is a projection
/// of it. Entries keep first-seen order across the initial detection load
/// and later user additions; duplicates (exact string match) are skipped.
#[derive(Debug, Default)]
pub struct ModelPathRegistry {
  paths: Mutex<Vec<String>>,
}

impl ModelPathRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Populate the registry from the backend's detection call, replacing any
  /// previous contents. An empty result is valid and leaves the registry in
  /// its empty (placeholder) state. Returns how many paths were loaded.
  pub async fn load_initial(
    &self,
    api: &dyn DeployApi,
    workflow: &Value,
  ) -> Result<usize, RegistryError> {
    let detected = api.initial_models(workflow).await?;

    let mut paths = self.paths.lock().unwrap();
    paths.clear();
    for path in detected {
      if !paths.contains(&path) {
        paths.push(path);
      }
    }

    debug!(count = paths.len(), "loaded initial model paths");
    Ok(paths.len())
  }

  /// Validate a user-entered path with the backend and merge the expanded
  /// paths into the registry. Returns the paths that were actually new.
  pub async fn validate_and_add(
    &self,
    api: &dyn DeployApi,
    raw_path: &str,
  ) -> Result<Vec<String>, RegistryError> {
    let validation = api.validate_model_path(raw_path).await?;

    if !validation.is_success() {
      let message = validation
        .message
        .unwrap_or_else(|| "Invalid model path".to_string());
      return Err(RegistryError::PathRejected(message));
    }

    if validation.model_paths.is_empty() {
      return Err(RegistryError::NoModelsFound);
    }

    let mut added = Vec::new();
    for path in validation.model_paths {
      if self.add(&path) {
        added.push(path);
      }
    }
    Ok(added)
  }

  /// Insert a path, skipping it if already present. Returns whether it was
  /// added.
  pub fn add(&self, path: &str) -> bool {
    let mut paths = self.paths.lock().unwrap();
    if paths.iter().any(|p| p == path) {
      false
    } else {
      paths.push(path.to_string());
      true
    }
  }

  /// Remove a path. Returns whether it was present.
  pub fn remove(&self, path: &str) -> bool {
    let mut paths = self.paths.lock().unwrap();
    let before = paths.len();
    paths.retain(|p| p != path);
    paths.len() != before
  }

  /// Current contents in insertion order.
  pub fn paths(&self) -> Vec<String> {
    self.paths.lock().unwrap().clone()
  }

  /// Whether the registry is empty (projections show the placeholder).
  pub fn is_empty(&self) -> bool {
    self.paths.lock().unwrap().is_empty()
  }

  /// Contents filtered for submission: placeholder or status rows that leaked
  /// in from a projection are dropped.
  pub fn deployable_paths(&self) -> Vec<String> {
    self
      .paths
      .lock()
      .unwrap()
      .iter()
      .filter(|p| !STATUS_TEXTS.contains(&p.as_str()))
      .cloned()
      .collect()
  }
}
