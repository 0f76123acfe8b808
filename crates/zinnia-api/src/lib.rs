//! Zinnia API
//!
//! HTTP client for the deployment backend. The backend lives next to the
//! editor's own server and speaks JSON over four endpoints: environment
//! metadata (`/object_info`), model path detection and validation, and the
//! deployment submission itself (`/deploy/generate_requirements`).
//!
//! The [`DeployApi`] trait is the seam the rest of the system depends on;
//! [`HttpDeployApi`] is the reqwest implementation. The backend reports
//! business failures in the response body (`status: "error"`), not via HTTP
//! status codes, so the client parses bodies rather than checking statuses.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, DeployApi, HttpDeployApi};
pub use error::ApiError;
pub use types::{DeployRequest, DeployResponse, InitialModelsResponse, PathValidation};
