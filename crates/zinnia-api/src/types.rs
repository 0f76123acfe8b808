use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `/deploy/generate_requirements`.
///
/// Field names are the wire protocol: `filePath` is the one camelCase
/// holdout, everything else is snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployRequest {
  pub workflow: Value,
  #[serde(rename = "filePath")]
  pub file_path: String,
  pub object_info: Value,
  pub product_name: String,
  pub user_id: String,
  pub secret_key: String,
  #[serde(default)]
  pub additional_model_paths: Vec<String>,
}

/// Response body from `/deploy/generate_requirements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployResponse {
  pub status: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl DeployResponse {
  /// Whether the backend reported a business error.
  pub fn is_error(&self) -> bool {
    self.status == "error"
  }
}

/// Response body from `/deploy/get_initial_models`.
///
/// A missing or empty list is a valid answer (nothing detected).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InitialModelsResponse {
  #[serde(default)]
  pub models: Vec<String>,
}

/// Response body from `/deploy/validate_and_get_model_paths`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathValidation {
  pub status: String,
  #[serde(default)]
  pub model_paths: Vec<String>,
  #[serde(default)]
  pub message: Option<String>,
}

impl PathValidation {
  /// Whether the backend accepted the path.
  pub fn is_success(&self) -> bool {
    self.status == "success"
  }
}
