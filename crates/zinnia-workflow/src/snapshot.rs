use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SnapshotError;

/// File name for the locally saved review copy of the graph.
pub const REVIEW_ARTIFACT_NAME: &str = "graphics_workflow_re.json";

/// Target file name the backend stores the graph under.
pub const DEPLOY_GRAPH_NAME: &str = "graphics_workflow.json";

/// The editor's current graph, as returned by the host serialization call.
///
/// The host hands back `{"output": {...}}` where `output` maps node ids to
/// their class type and resolved inputs. Only `output` is kept; everything
/// the deploy flow does (artifact, detection, submission) works on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
  pub output: Value,
}

impl GraphSnapshot {
  /// Build a snapshot from the raw value the host serialization call returns.
  ///
  /// Fails if the value carries no `output` field or the graph is not a JSON
  /// object (node id -> node).
  pub fn from_host_value(value: Value) -> Result<Self, SnapshotError> {
    let output = match value {
      Value::Object(mut map) => map.remove("output").ok_or(SnapshotError::MissingOutput)?,
      _ => return Err(SnapshotError::MissingOutput),
    };

    if !output.is_object() {
      return Err(SnapshotError::NotAnObject);
    }

    Ok(Self { output })
  }

  /// Number of nodes in the graph.
  pub fn node_count(&self) -> usize {
    self.output.as_object().map(|m| m.len()).unwrap_or(0)
  }

  /// Render the graph as the review artifact: pretty-printed, 2-space indent.
  ///
  /// Re-parsing the rendered text yields exactly `self.output`.
  pub fn render_artifact(&self) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&self.output)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_from_host_value() {
    let snapshot = GraphSnapshot::from_host_value(json!({
      "workflow": {"extra": true},
      "output": {"1": {"class_type": "CheckpointLoader", "inputs": {}}}
    }))
    .unwrap();

    assert_eq!(snapshot.node_count(), 1);
  }

  #[test]
  fn test_from_host_value_missing_output() {
    let result = GraphSnapshot::from_host_value(json!({"workflow": {}}));
    assert!(matches!(result, Err(SnapshotError::MissingOutput)));
  }

  #[test]
  fn test_from_host_value_non_object_graph() {
    let result = GraphSnapshot::from_host_value(json!({"output": [1, 2, 3]}));
    assert!(matches!(result, Err(SnapshotError::NotAnObject)));
  }

  #[test]
  fn test_artifact_round_trip() {
    let snapshot = GraphSnapshot {
      output: json!({
        "1": {"class_type": "CLIPLoader", "inputs": {"clip_name": "clip.safetensors"}},
        "2": {"class_type": "KSampler", "inputs": {"steps": 20}}
      }),
    };

    let rendered = snapshot.render_artifact().unwrap();
    let parsed: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, snapshot.output);
  }

  #[test]
  fn test_artifact_is_two_space_indented() {
    let snapshot = GraphSnapshot {
      output: json!({"1": {"class_type": "KSampler"}}),
    };

    let rendered = snapshot.render_artifact().unwrap();
    assert!(rendered.contains("\n  \"1\""));
  }
}
