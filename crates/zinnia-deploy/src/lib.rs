//! Zinnia Deploy
//!
//! The deployment flow of the Zinnia editor extension. Everything the
//! "Deploy" button does lives here: validating the credential form, keeping
//! the model path registry, and running the deploy sequence - serialize the
//! graph, save the review artifact, fetch environment metadata, submit the
//! request, and reconcile the response into user-visible outcome state.
//!
//! The flow talks to the editor through the `zinnia-host` traits and to the
//! backend through the `zinnia-api` trait, so it runs the same against the
//! real host, the CLI, or test fakes. UI state (modal controls, status
//! line, banner) is a projection of [`DeployEvent`]s and the notify types -
//! never the other way around.

mod events;
mod extension;
mod form;
mod orchestrator;
mod registry;
mod state;

pub use events::{DeployEvent, DeployObserver, ModalProjection, NoopObserver};
pub use extension::{EXTENSION_NAME, MenuButtonExtension};
pub use form::{DeployForm, FormError};
pub use orchestrator::{DeployOrchestrator, DeployOutcome};
pub use registry::{EMPTY_PLACEHOLDER, ModelPathRegistry, RegistryError};
pub use state::{RunGuard, RunState};
