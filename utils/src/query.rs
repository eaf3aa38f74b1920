/// Ordered collection of query arguments. Arguments with empty values are
/// skipped entirely: the remote treats an absent filter and a blank filter
/// differently, so blanks must never reach the wire.
#[derive(Debug, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one argument. Values must already be encoded where needed;
    /// empty values are dropped.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.params.push((key.to_string(), value));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render as `?a=1&b=2`, preserving insertion order, or an empty string
    /// when no arguments survived.
    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let joined = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let mut params = QueryParams::new();
        params.push("query", "carpenter");
        params.push("limit", "12");
        params.push("page", "0");
        assert_eq!(params.to_query_string(), "?query=carpenter&limit=12&page=0");
    }

    #[test]
    fn empty_values_are_skipped() {
        let mut params = QueryParams::new();
        params.push("lang", "");
        params.push("provider", "");
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");

        params.push("type", "mooc");
        assert_eq!(params.to_query_string(), "?type=mooc");
    }

    #[test]
    fn zero_is_not_an_empty_value() {
        let mut params = QueryParams::new();
        params.push("page", "0");
        assert_eq!(params.to_query_string(), "?page=0");
    }
}
