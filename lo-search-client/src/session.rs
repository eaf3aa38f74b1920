/// Cross-request field memory owned by the host. Paginated requests arrive
/// without the original form values, so the host replays keyword and
/// filters from here before calling `search` again. The client itself
/// never reads or writes this store.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// Session key for one remembered form field of one integration instance.
pub fn field_key(instance: &str, field: &str) -> String {
    format!("lo_search_{instance}_{field}")
}
