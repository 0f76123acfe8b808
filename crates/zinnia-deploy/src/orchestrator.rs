//! The deploy run sequence.
//!
//! One `run()` is the whole "Deploy" click: serialize the graph, save the
//! review artifact, fetch environment metadata, submit the request, map the
//! response to an outcome. Steps are strictly sequential awaits; there are
//! no retries and no timeouts - a failed call ends the run, a hung call
//! stalls it.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use zinnia_api::{ApiError, DeployApi, DeployRequest};
use zinnia_host::{ArtifactSink, GraphSource, HostError};
use zinnia_notify::{BannerHost, NoticeKind};
use zinnia_workflow::{DEPLOY_GRAPH_NAME, REVIEW_ARTIFACT_NAME};

use crate::events::{DeployEvent, DeployObserver, NoopObserver};
use crate::form::DeployForm;
use crate::registry::ModelPathRegistry;
use crate::state::RunState;

/// User-facing text when a run fails for any reason the server didn't name.
const GENERIC_FAILURE_TEXT: &str =
  "An error occurred during deployment. Please check the console for details.";

/// Fallback when the server reports an error without a message.
const SERVER_ERROR_FALLBACK: &str = "An error occurred during deployment";

/// Fallback when the server accepts without a message.
const SERVER_SUCCESS_FALLBACK: &str = "Deployment initiated successfully!";

/// Outcome of a deploy run.
#[derive(Debug, Clone, PartialEq)]
pub enum DeployOutcome {
  Success { message: String },
  Failure { message: String },
}

impl DeployOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success { .. })
  }

  /// The user-facing message.
  pub fn message(&self) -> &str {
    match self {
      Self::Success { message } | Self::Failure { message } => message,
    }
  }
}

/// Errors inside a run. All of them are downgraded to the generic failure
/// text before reaching the user; the detail goes to the log.
#[derive(Debug, Error)]
enum RunError {
  #[error(transparent)]
  Host(#[from] HostError),

  #[error(transparent)]
  Api(#[from] ApiError),
}

/// Drives a deployment from form input to outcome.
///
/// The orchestrator owns the run state, the model path registry, and the
/// banner slot. It is `Send + Sync` behind `Arc` and guards itself against
/// overlapping runs: a second `run()` while one is active is dropped
/// silently (logged, not queued).
pub struct DeployOrchestrator {
  api: Arc<dyn DeployApi>,
  graph: Arc<dyn GraphSource>,
  artifacts: Arc<dyn ArtifactSink>,
  registry: ModelPathRegistry,
  state: RunState,
  banners: BannerHost,
  observer: Arc<dyn DeployObserver>,
}

impl DeployOrchestrator {
  /// Create an orchestrator that discards events.
  pub fn new(
    api: Arc<dyn DeployApi>,
    graph: Arc<dyn GraphSource>,
    artifacts: Arc<dyn ArtifactSink>,
  ) -> Self {
    Self::with_observer(api, graph, artifacts, Arc::new(NoopObserver))
  }

  /// Create an orchestrator with a custom observer (e.g. a modal
  /// projection).
  pub fn with_observer(
    api: Arc<dyn DeployApi>,
    graph: Arc<dyn GraphSource>,
    artifacts: Arc<dyn ArtifactSink>,
    observer: Arc<dyn DeployObserver>,
  ) -> Self {
    Self {
      api,
      graph,
      artifacts,
      registry: ModelPathRegistry::new(),
      state: RunState::new(),
      banners: BannerHost::new(),
      observer,
    }
  }

  /// The model path registry attached to this deployment.
  pub fn registry(&self) -> &ModelPathRegistry {
    &self.registry
  }

  /// The banner slot outcomes are pushed to.
  pub fn banners(&self) -> &BannerHost {
    &self.banners
  }

  /// Whether a run is currently active.
  pub fn is_deploying(&self) -> bool {
    self.state.is_deploying()
  }

  /// Run a deployment.
  ///
  /// Returns `None` on the silent paths: a run already in flight, or
  /// credentials that fail re-validation. Otherwise `Some(outcome)`, with
  /// the outcome already pushed to the banner and the observer. The UI
  /// state is restored on every exit path.
  pub async fn run(&self, form: &DeployForm) -> Option<DeployOutcome> {
    // A concurrent caller gets nothing: no event, no banner, no outcome.
    let Some(_guard) = self.state.try_begin(&*self.observer) else {
      debug!("deployment already in progress");
      return None;
    };

    self.observer.notify(DeployEvent::RunStarted);

    // The form was validated when the modal submitted, but stale UI state
    // has slipped through that check before. Fails to the log only.
    if let Err(e) = form.validate() {
      error!(error = %e, "deploy parameters incomplete, dropping run");
      return None;
    }

    let outcome = match self.execute(form).await {
      Ok(outcome) => outcome,
      Err(e) => {
        error!(error = %e, "deployment run failed");
        DeployOutcome::Failure {
          message: GENERIC_FAILURE_TEXT.to_string(),
        }
      }
    };

    match &outcome {
      DeployOutcome::Success { message } => {
        info!(%message, "deployment accepted");
        self.banners.show(NoticeKind::Success, message.clone());
      }
      DeployOutcome::Failure { message } => {
        warn!(%message, "deployment failed");
        self.banners.show(NoticeKind::Error, message.clone());
      }
    }

    self.observer.notify(DeployEvent::RunCompleted {
      outcome: outcome.clone(),
    });

    Some(outcome)
  }

  /// Everything after validation: serialize, save the artifact, fetch
  /// metadata, submit, map the response. Any error here becomes the generic
  /// failure outcome in `run`.
  async fn execute(&self, form: &DeployForm) -> Result<DeployOutcome, RunError> {
    let snapshot = self.graph.serialize_graph().await?;

    let artifact_path = self
      .artifacts
      .save_json(REVIEW_ARTIFACT_NAME, &snapshot.output)
      .await?;
    debug!(path = %artifact_path.display(), "saved review artifact");

    let object_info = self.api.object_info().await?;

    let request = DeployRequest {
      workflow: snapshot.output,
      file_path: DEPLOY_GRAPH_NAME.to_string(),
      object_info,
      product_name: form.product_name.clone(),
      user_id: form.user_id.clone(),
      secret_key: form.secret_key.clone(),
      additional_model_paths: self.registry.deployable_paths(),
    };

    let response = self.api.generate_requirements(&request).await?;

    if response.is_error() {
      Ok(DeployOutcome::Failure {
        message: response
          .message
          .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()),
      })
    } else {
      Ok(DeployOutcome::Success {
        message: response
          .message
          .unwrap_or_else(|| SERVER_SUCCESS_FALLBACK.to_string()),
      })
    }
  }
}
