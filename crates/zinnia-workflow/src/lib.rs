//! Zinnia Workflow
//!
//! This crate contains the serialized workflow graph types for Zinnia.
//! A snapshot is the editor's current node graph as produced by the host's
//! serialization call: a JSON document mapping node ids to their class type
//! and resolved inputs.
//!
//! Snapshots are what the deploy flow ships to the backend and what gets
//! written to disk as the review artifact. The crate also knows how to scan
//! a snapshot for model file references (checkpoints, LoRAs, VAEs, ...) by
//! file extension.

mod error;
mod models;
mod snapshot;

pub use error::SnapshotError;
pub use models::{MODEL_FILE_EXTENSIONS, detect_model_references};
pub use snapshot::{DEPLOY_GRAPH_NAME, GraphSnapshot, REVIEW_ARTIFACT_NAME};
