//! Model reference detection over a graph snapshot.
//!
//! Loader nodes reference model assets by file name in their inputs
//! (`ckpt_name`, `lora_name`, ...). Rather than hardcode every loader class,
//! detection scans all node inputs for string values that end with a known
//! model file extension. Strings nested one level inside arrays or objects
//! are included; deeper nesting is not seen in practice.

use serde_json::Value;

/// File extensions that identify a model asset.
pub const MODEL_FILE_EXTENSIONS: &[&str] = &[
  ".safetensors",
  ".sft",
  ".pkl",
  ".ckpt",
  ".onnx",
  ".pt",
  ".pth",
  ".bin",
  ".pb",
  ".h5",
  ".tflite",
];

/// Collect model file references from every node's inputs, deduplicated in
/// first-seen order. Windows-style separators are normalized to `/`.
pub fn detect_model_references(graph: &Value) -> Vec<String> {
  let mut seen = Vec::new();

  let Some(nodes) = graph.as_object() else {
    return seen;
  };

  for node in nodes.values() {
    let Some(inputs) = node.get("inputs") else {
      continue;
    };

    for value in input_values(inputs) {
      for reference in model_strings(value) {
        let normalized = reference.replace('\\', "/");
        if !seen.contains(&normalized) {
          seen.push(normalized);
        }
      }
    }
  }

  seen
}

/// Iterate the values of an inputs object. Non-object inputs yield nothing.
fn input_values(inputs: &Value) -> impl Iterator<Item = &Value> {
  inputs.as_object().into_iter().flat_map(|m| m.values())
}

/// Extract model file names from a single input value.
fn model_strings(value: &Value) -> Vec<&str> {
  match value {
    Value::String(s) if has_model_extension(s) => vec![s.as_str()],
    Value::Array(items) => items.iter().flat_map(model_strings).collect(),
    Value::Object(map) => map
      .values()
      .filter_map(|v| v.as_str())
      .filter(|s| has_model_extension(s))
      .collect(),
    _ => vec![],
  }
}

fn has_model_extension(s: &str) -> bool {
  let lower = s.to_lowercase();
  MODEL_FILE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_detects_checkpoint_and_lora() {
    let graph = json!({
      "1": {"class_type": "CheckpointLoader", "inputs": {"ckpt_name": "sd15.ckpt"}},
      "2": {"class_type": "LoraLoader", "inputs": {"lora_name": "detail.safetensors", "strength": 0.8}}
    });

    assert_eq!(
      detect_model_references(&graph),
      vec!["sd15.ckpt".to_string(), "detail.safetensors".to_string()]
    );
  }

  #[test]
  fn test_case_insensitive_extension() {
    let graph = json!({
      "1": {"class_type": "VAELoader", "inputs": {"vae_name": "VAE.SAFETENSORS"}}
    });

    assert_eq!(detect_model_references(&graph), vec!["VAE.SAFETENSORS"]);
  }

  #[test]
  fn test_normalizes_backslashes() {
    let graph = json!({
      "1": {"inputs": {"ckpt_name": "checkpoints\\sd15.ckpt"}}
    });

    assert_eq!(detect_model_references(&graph), vec!["checkpoints/sd15.ckpt"]);
  }

  #[test]
  fn test_nested_values() {
    let graph = json!({
      "1": {"inputs": {
        "stack": ["a.pt", ["b.onnx"]],
        "table": {"name": "c.pth", "count": 3}
      }}
    });

    assert_eq!(detect_model_references(&graph), vec!["a.pt", "b.onnx", "c.pth"]);
  }

  #[test]
  fn test_first_seen_dedup() {
    let graph = json!({
      "1": {"inputs": {"ckpt_name": "shared.ckpt"}},
      "2": {"inputs": {"ckpt_name": "shared.ckpt"}}
    });

    assert_eq!(detect_model_references(&graph), vec!["shared.ckpt"]);
  }

  #[test]
  fn test_ignores_non_model_strings() {
    let graph = json!({
      "1": {"inputs": {"text": "a beautiful landscape", "steps": 20}},
      "2": {"class_type": "Note"}
    });

    assert!(detect_model_references(&graph).is_empty());
  }
}
