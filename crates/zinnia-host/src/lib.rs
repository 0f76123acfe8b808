//! Zinnia Host
//!
//! This crate defines the collaborator surface of the host node-graph editor.
//! The deploy flow never talks to the editor directly - it goes through these
//! traits, which keeps the flow host-agnostic and testable in isolation:
//!
//! - [`GraphSource`] - the host's graph serialization call
//! - [`ArtifactSink`] - saving a JSON document on the user's machine
//!   (the stand-in for a browser download)
//! - [`MenuSurface`] / [`Extension`] / [`ExtensionRegistrar`] - the host's
//!   `{name, setup()}` extension registration mechanism, guarded to run once
//!   per session

mod artifact;
mod error;
mod extension;
mod graph;

pub use artifact::{ArtifactSink, FsArtifactSink};
pub use error::HostError;
pub use extension::{Extension, ExtensionRegistrar, MenuControl, MenuSurface};
pub use graph::GraphSource;
