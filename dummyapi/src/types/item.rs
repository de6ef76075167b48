use serde_json::{Map, Value};

/// A user, post or comment exactly as the service returned it.
pub type ResourceItem = Map<String, Value>;

/// Field a post gains once its comments have been fetched.
pub const COMMENTS_FIELD: &str = "comments";

/// Extract the `id` of an item, accepting string or numeric ids.
pub fn item_id(item: &ResourceItem) -> Option<String> {
    match item.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
