//! The `list/all` response: node → optional list of bundle descriptors.

use diag_core::errors::{DiagError, DiagResult};
use serde_json::{Map, Value};

use crate::session::{RequestOptions, Session};

/// Endpoint listing every bundle on every node.
pub(crate) const LIST_PATH: &str = "list/all";

/// One bundle entry from a node's list.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleDescriptor {
    /// Node identifier the entry was listed under.
    pub node: String,
    /// Node-local path of the bundle file.
    pub file_name: String,
    /// Every other field the server sent for this entry.
    pub metadata: Map<String, Value>,
}

impl BundleDescriptor {
    /// Bundle name: the basename of `file_name`.
    pub fn bundle_name(&self) -> &str {
        basename(&self.file_name)
    }
}

/// Final `/`-separated component of `path`.
///
/// A trailing slash yields an empty name, matching POSIX basename-of-path
/// semantics for directory-looking paths.
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Flatten a listing into descriptors, node order first, then list order.
///
/// Nodes mapped to `null` contribute nothing. Anything else that is not a
/// list of objects with a string `file_name` is a malformed response.
pub fn flatten_listing(body: Value) -> DiagResult<Vec<BundleDescriptor>> {
    let nodes = match body {
        Value::Object(nodes) => nodes,
        other => {
            return Err(DiagError::MalformedResponse {
                field: "<body>".to_string(),
                reason: format!("expected an object keyed by node, got {}", kind(&other)),
            })
        }
    };

    let mut descriptors = Vec::new();
    for (node, entries) in nodes {
        let entries = match entries {
            Value::Null => continue,
            Value::Array(entries) => entries,
            other => {
                return Err(DiagError::MalformedResponse {
                    field: node,
                    reason: format!("expected a list or null, got {}", kind(&other)),
                })
            }
        };

        for entry in entries {
            let mut metadata = match entry {
                Value::Object(fields) => fields,
                other => {
                    return Err(DiagError::MalformedResponse {
                        field: format!("{node}[]"),
                        reason: format!("expected an object, got {}", kind(&other)),
                    })
                }
            };
            let file_name = match metadata.remove("file_name") {
                Some(Value::String(name)) => name,
                _ => {
                    return Err(DiagError::MalformedResponse {
                        field: format!("{node}[].file_name"),
                        reason: "is missing or not a string".to_string(),
                    })
                }
            };
            descriptors.push(BundleDescriptor {
                node: node.clone(),
                file_name,
                metadata,
            });
        }
    }
    Ok(descriptors)
}

/// GET `list/all`, require success, and flatten the result.
pub fn fetch_listing(session: &Session) -> DiagResult<Vec<BundleDescriptor>> {
    let body: Value = session
        .get(LIST_PATH, RequestOptions::default())?
        .error_for_status()?
        .json()?;
    flatten_listing(body)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn basename_strips_directories() {
        assert_eq!(basename("/var/log/bundle-1.zip"), "bundle-1.zip");
        assert_eq!(basename("bundle-1.zip"), "bundle-1.zip");
        assert_eq!(basename("relative/dir/b.zip"), "b.zip");
        assert_eq!(basename("/var/log/"), "");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn flatten_skips_null_nodes_and_keeps_metadata() {
        let descriptors = flatten_listing(json!({
            "10.0.0.1": [{"file_name": "/a/one.zip", "file_size": 42}],
            "10.0.0.2": null,
        }))
        .unwrap();

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].node, "10.0.0.1");
        assert_eq!(descriptors[0].bundle_name(), "one.zip");
        assert_eq!(descriptors[0].metadata["file_size"], json!(42));
        assert!(!descriptors[0].metadata.contains_key("file_name"));
    }

    #[test]
    fn flatten_rejects_non_list_node_value() {
        let err = flatten_listing(json!({"n": "oops"})).unwrap_err();
        assert!(matches!(err, DiagError::MalformedResponse { ref field, .. } if field == "n"));
    }

    #[test]
    fn flatten_rejects_top_level_list() {
        assert!(flatten_listing(json!([])).is_err());
    }
}
