/// Flatten a JSON value into a single table cell.
pub fn value_to_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(k, v)| format!("{}: {}", k, value_to_cell(v)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
