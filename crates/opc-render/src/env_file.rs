use opc_types::{OpcError, ResultMap};
use serde_json::Value;

/// Render `KEY=VALUE` lines in lexicographic key order.
///
/// Scalars are written bare (`null` as an empty value). Arrays and objects are written as
/// compact JSON inside single quotes so a shell sees one token.
pub fn render_env_file(map: &ResultMap) -> Result<String, OpcError> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut out = String::new();
    for key in keys {
        out.push_str(key);
        out.push('=');
        out.push_str(&render_value(&map[key.as_str()])?);
        out.push('\n');
    }
    Ok(out)
}

fn render_value(value: &Value) -> Result<String, OpcError> {
    Ok(match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => format!("'{}'", serde_json::to_string(value)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> ResultMap {
        opc_types::into_result_map(value).expect("object")
    }

    #[test]
    fn empty_map_renders_nothing() {
        assert_eq!(render_env_file(&ResultMap::new()).unwrap(), "");
    }

    #[test]
    fn keys_are_sorted_and_collections_quoted() {
        let out = render_env_file(&map(json!({"tags": ["a", "b"], "count": 2}))).unwrap();
        assert_eq!(out, "count=2\ntags='[\"a\",\"b\"]'\n");
    }

    #[test]
    fn scalars_render_bare() {
        let out = render_env_file(&map(json!({
            "env": "QA",
            "debug": true,
            "ratio": 0.5,
            "unset": null,
        })))
        .unwrap();
        insta::assert_snapshot!(out.trim_end(), @r"
        debug=true
        env=QA
        ratio=0.5
        unset=
        ");
    }

    #[test]
    fn nested_object_is_one_quoted_token() {
        let out = render_env_file(&map(json!({"database": {"port": 5432}}))).unwrap();
        assert_eq!(out, "database='{\"port\":5432}'\n");
    }
}
