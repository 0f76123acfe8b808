use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{DeployRequest, DeployResponse, InitialModelsResponse, PathValidation};

/// Default backend URL: the editor's local server.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8188";

/// Synthesized failure message when the deploy response body is not JSON.
const PARSE_FAILURE_MESSAGE: &str = "Failed to parse server response";

/// The deployment backend, as the rest of the system sees it.
///
/// Tests implement this with in-memory fakes; production uses
/// [`HttpDeployApi`].
#[async_trait]
pub trait DeployApi: Send + Sync {
  /// Fetch host environment metadata (available node definitions).
  ///
  /// A malformed body degrades to `{}` - deployment proceeds without
  /// metadata rather than failing here.
  async fn object_info(&self) -> Result<Value, ApiError>;

  /// Ask the backend to detect model paths referenced by `workflow`.
  async fn initial_models(&self, workflow: &Value) -> Result<Vec<String>, ApiError>;

  /// Validate a user-entered model path and expand it to concrete paths.
  async fn validate_model_path(&self, path: &str) -> Result<PathValidation, ApiError>;

  /// Submit a deployment request.
  ///
  /// A malformed body yields a synthesized error response; the outcome is
  /// always expressed through [`DeployResponse::status`].
  async fn generate_requirements(
    &self,
    request: &DeployRequest,
  ) -> Result<DeployResponse, ApiError>;
}

/// reqwest-backed [`DeployApi`] implementation.
///
/// No request timeout is configured: a hung backend stalls the run that
/// issued the request, and nothing else. The backend reports failures in the
/// body's `status` field, so HTTP status codes are not checked.
pub struct HttpDeployApi {
  http_client: Client,
  api_url: String,
}

impl HttpDeployApi {
  /// Create a client against the given base URL.
  pub fn new(api_url: impl Into<String>) -> Self {
    Self {
      http_client: Client::new(),
      api_url: api_url.into(),
    }
  }

  /// Get the configured base URL.
  pub fn api_url(&self) -> &str {
    &self.api_url
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.api_url, path)
  }
}

#[async_trait]
impl DeployApi for HttpDeployApi {
  async fn object_info(&self) -> Result<Value, ApiError> {
    let body = self
      .http_client
      .get(self.url("/object_info"))
      .send()
      .await?
      .text()
      .await?;

    Ok(parse_object_info(&body))
  }

  async fn initial_models(&self, workflow: &Value) -> Result<Vec<String>, ApiError> {
    let body = self
      .http_client
      .post(self.url("/deploy/get_initial_models"))
      .json(&json!({ "workflow": workflow }))
      .send()
      .await?
      .text()
      .await?;

    let response: InitialModelsResponse =
      serde_json::from_str(&body).map_err(|e| ApiError::parse(e.to_string()))?;
    Ok(response.models)
  }

  async fn validate_model_path(&self, path: &str) -> Result<PathValidation, ApiError> {
    debug!(path, "validating model path");

    let body = self
      .http_client
      .post(self.url("/deploy/validate_and_get_model_paths"))
      .json(&json!({ "path": path }))
      .send()
      .await?
      .text()
      .await?;

    serde_json::from_str(&body).map_err(|e| ApiError::parse(e.to_string()))
  }

  async fn generate_requirements(
    &self,
    request: &DeployRequest,
  ) -> Result<DeployResponse, ApiError> {
    debug!(product_name = %request.product_name, "submitting deployment request");

    let body = self
      .http_client
      .post(self.url("/deploy/generate_requirements"))
      .json(request)
      .send()
      .await?
      .text()
      .await?;

    Ok(parse_deploy_response(&body))
  }
}

/// Parse an `/object_info` body, degrading a malformed one to `{}`.
fn parse_object_info(body: &str) -> Value {
  match serde_json::from_str(body) {
    Ok(value) => value,
    Err(e) => {
      warn!(error = %e, "object_info body was not JSON, using empty metadata");
      json!({})
    }
  }
}

/// Parse a deploy response body, synthesizing an error response when the
/// body is not JSON.
fn parse_deploy_response(body: &str) -> DeployResponse {
  match serde_json::from_str(body) {
    Ok(response) => response,
    Err(e) => {
      warn!(error = %e, "deploy response body was not JSON");
      DeployResponse {
        status: "error".to_string(),
        message: Some(PARSE_FAILURE_MESSAGE.to_string()),
      }
    }
  }
}
