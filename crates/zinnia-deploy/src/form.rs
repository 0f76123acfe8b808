use thiserror::Error;

/// Credentials entered in the deploy modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeployForm {
  pub product_name: String,
  pub user_id: String,
  pub secret_key: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
  #[error("missing required field: {0}")]
  MissingField(&'static str),
}

impl DeployForm {
  pub fn new(
    product_name: impl Into<String>,
    user_id: impl Into<String>,
    secret_key: impl Into<String>,
  ) -> Self {
    Self {
      product_name: product_name.into(),
      user_id: user_id.into(),
      secret_key: secret_key.into(),
    }
  }

  /// Check that every field is filled in.
  ///
  /// Callers surface the error synchronously (the modal raises an alert)
  /// before any network activity happens.
  pub fn validate(&self) -> Result<(), FormError> {
    if self.product_name.is_empty() {
      return Err(FormError::MissingField("product name"));
    }
    if self.user_id.is_empty() {
      return Err(FormError::MissingField("user id"));
    }
    if self.secret_key.is_empty() {
      return Err(FormError::MissingField("secret key"));
    }
    Ok(())
  }
}
