use async_trait::async_trait;
use zinnia_workflow::GraphSnapshot;

use crate::error::HostError;

/// The host's graph serialization call.
///
/// In the editor this is the "serialize the current canvas" API; other
/// implementations read a saved workflow from disk. Either way the deploy
/// flow receives a [`GraphSnapshot`].
#[async_trait]
pub trait GraphSource: Send + Sync {
  /// Serialize the current workflow graph.
  async fn serialize_graph(&self) -> Result<GraphSnapshot, HostError>;
}
