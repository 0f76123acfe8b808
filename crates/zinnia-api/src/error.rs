use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  /// The request could not be sent or the connection failed.
  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  /// The response body was not the JSON shape the endpoint promises.
  #[error("failed to parse response: {message}")]
  Parse { message: String },
}

impl ApiError {
  /// Create a parse error.
  pub fn parse(message: impl Into<String>) -> Self {
    Self::Parse {
      message: message.into(),
    }
  }
}
