//! Flattening of structured parameters into query-string items.
//!
//! Parameters are serialized to a `serde_json::Value` first, converted into a
//! `QueryNode` tree, then flattened with bracketed key paths:
//!
//! - `{"a": {"b": 1}}` gives `a[b]=1`
//! - `{"a": [1, 2]}` gives `a[]=1` and `a[]=2` (indices are not encoded)
//!
//! Items come out in the traversal order of the source mapping, which is the
//! field declaration order for derived `Serialize` impls.

use serde::Serialize;
use serde_json::Value;

use crate::error::NetworkError;

/// Intermediate form of a serialized parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    Mapping(Vec<(String, QueryNode)>),
    Sequence(Vec<QueryNode>),
    Scalar(String),
}

impl QueryNode {
    /// Serialize `value` into a tree.
    pub fn from_serialize<P: Serialize + ?Sized>(value: &P) -> Result<Self, NetworkError> {
        let value = serde_json::to_value(value)
            .map_err(|e| NetworkError::EncodingError(e.to_string()))?;
        Ok(Self::from(value))
    }
}

impl From<Value> for QueryNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => QueryNode::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, QueryNode::from(value)))
                    .collect(),
            ),
            Value::Array(items) => {
                QueryNode::Sequence(items.into_iter().map(QueryNode::from).collect())
            }
            Value::String(s) => QueryNode::Scalar(s),
            Value::Number(n) => QueryNode::Scalar(n.to_string()),
            Value::Bool(b) => QueryNode::Scalar(b.to_string()),
            Value::Null => QueryNode::Scalar(String::new()),
        }
    }
}

/// Flatten a tree into `(key, value)` query items.
///
/// Only a top-level mapping produces items; a bare sequence or scalar has no
/// key to hang off and yields nothing.
pub fn flatten(node: &QueryNode) -> Vec<(String, String)> {
    let mut items = Vec::new();
    if let QueryNode::Mapping(entries) = node {
        for (key, value) in entries {
            flatten_into(key.clone(), value, &mut items);
        }
    }
    items
}

fn flatten_into(path: String, node: &QueryNode, items: &mut Vec<(String, String)>) {
    match node {
        QueryNode::Mapping(entries) => {
            for (key, value) in entries {
                flatten_into(format!("{path}[{key}]"), value, items);
            }
        }
        QueryNode::Sequence(values) => {
            let element_path = format!("{path}[]");
            for value in values {
                flatten_into(element_path.clone(), value, items);
            }
        }
        QueryNode::Scalar(s) => items.push((path, s.clone())),
    }
}

/// Serialize and flatten in one step.
pub fn query_items<P: Serialize + ?Sized>(
    value: &P,
) -> Result<Vec<(String, String)>, NetworkError> {
    Ok(flatten(&QueryNode::from_serialize(value)?))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn flat_mapping_emits_one_item_per_key() {
        let items = query_items(&json!({"q": "rust", "page": 2, "exact": true})).unwrap();
        assert_eq!(items, pairs(&[("q", "rust"), ("page", "2"), ("exact", "true")]));
    }

    #[test]
    fn nested_mapping_uses_bracketed_key() {
        let items = query_items(&json!({"a": {"b": 1}})).unwrap();
        assert_eq!(items, pairs(&[("a[b]", "1")]));
    }

    #[test]
    fn sequence_elements_share_key() {
        let items = query_items(&json!({"a": [1, 2]})).unwrap();
        assert_eq!(items, pairs(&[("a[]", "1"), ("a[]", "2")]));
    }

    #[test]
    fn deep_nesting_composes_paths() {
        let items =
            query_items(&json!({"f": {"tags": ["x", "y"], "range": {"min": 1.5}}})).unwrap();
        assert_eq!(
            items,
            pairs(&[("f[tags][]", "x"), ("f[tags][]", "y"), ("f[range][min]", "1.5")])
        );
    }

    #[test]
    fn sequence_of_mappings() {
        let items = query_items(&json!({"s": [{"k": "v"}]})).unwrap();
        assert_eq!(items, pairs(&[("s[][k]", "v")]));
    }

    #[test]
    fn struct_fields_keep_declaration_order() {
        #[derive(Serialize)]
        struct Search {
            zeta: u8,
            alpha: u8,
            mid: &'static str,
        }
        let items = query_items(&Search {
            zeta: 1,
            alpha: 2,
            mid: "m",
        })
        .unwrap();
        assert_eq!(items, pairs(&[("zeta", "1"), ("alpha", "2"), ("mid", "m")]));
    }

    #[test]
    fn null_becomes_empty_value() {
        let items = query_items(&json!({"cursor": null})).unwrap();
        assert_eq!(items, pairs(&[("cursor", "")]));
    }

    #[test]
    fn non_mapping_top_level_yields_nothing() {
        assert!(query_items(&json!([1, 2, 3])).unwrap().is_empty());
        assert!(query_items(&"bare").unwrap().is_empty());
    }

    #[test]
    fn non_string_map_keys_fail_to_encode() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "v");
        let err = query_items(&map).unwrap_err();
        assert!(matches!(err, NetworkError::EncodingError(_)));
    }
}
