//! Path lookup in nested JSON objects.

use serde_json::Value;

use crate::error::Error;

/// Walk `path` through nested JSON objects and return the value at its end.
///
/// # Errors
///
/// Returns `Error::MissingKey` naming the first key that cannot be resolved,
/// either because it is absent or because the value reached so far is not an object.
///
/// # Example
///
/// ```rust
/// use ghorg::access_nested_map;
/// use serde_json::json;
///
/// let map = json!({"a": {"b": 2}});
/// assert_eq!(access_nested_map(&map, &["a", "b"]).unwrap(), &json!(2));
/// ```
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value, Error> {
    path.iter().try_fold(map, |current, key| {
        current
            .as_object()
            .and_then(|obj| obj.get(*key))
            .ok_or_else(|| Error::MissingKey {
                key: (*key).to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_access_nested_map() {
        let cases = [
            (json!({"a": 1}), vec!["a"], json!(1)),
            (json!({"a": {"b": 2}}), vec!["a"], json!({"b": 2})),
            (json!({"a": {"b": 2}}), vec!["a", "b"], json!(2)),
        ];

        for (map, path, expected) in cases {
            let value = access_nested_map(&map, &path).expect("path should resolve");
            assert_eq!(value, &expected);
        }
    }

    #[test]
    fn test_access_nested_map_missing_key() {
        let map = json!({});
        match access_nested_map(&map, &["a"]) {
            Err(Error::MissingKey { key }) => assert_eq!(key, "a"),
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_access_nested_map_through_scalar() {
        let map = json!({"a": 1});
        match access_nested_map(&map, &["a", "b"]) {
            Err(Error::MissingKey { key }) => assert_eq!(key, "b"),
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_path_returns_root() {
        let map = json!({"a": 1});
        assert_eq!(access_nested_map(&map, &[]).expect("root"), &map);
    }
}
