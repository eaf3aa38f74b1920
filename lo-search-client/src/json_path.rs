use serde_json::Value;

/// Walk a dot-separated path into a JSON value. Object segments address
/// keys, numeric segments index arrays. Resolution stops with `None` as
/// soon as a segment is missing or the current value is a scalar.
pub fn dotted_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Leaf lookup rendered as a string. Strings come back as-is, numbers and
/// booleans are stringified; containers and `null` count as absent.
pub fn dotted_string(value: &Value, path: &str) -> Option<String> {
    match dotted_get(value, path)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
