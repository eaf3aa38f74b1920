use getset::{CopyGetters, Getters};

/// One catalog search request. `page` is 1-indexed at this boundary and
/// clamped to at least 1; the client translates it to the remote's
/// 0-indexed scheme at transmission time. Empty filter strings mean "no
/// filter" and are omitted from the request.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct SearchQuery {
    #[getset(get = "pub")]
    keyword: String,
    #[getset(get_copy = "pub")]
    page: u32,
    #[getset(get = "pub")]
    language: String,
    #[getset(get = "pub")]
    provider: String,
    #[getset(get = "pub")]
    kind: String,
    #[getset(get_copy = "pub")]
    include_chargeable: bool,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, page: u32) -> Self {
        Self {
            keyword: keyword.into(),
            page: page.max(1),
            language: String::new(),
            provider: String::new(),
            kind: String::new(),
            include_chargeable: false,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Restrict to one learning-object type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Allow chargeable content in the results. Off by default.
    pub fn with_chargeable(mut self, include_chargeable: bool) -> Self {
        self.include_chargeable = include_chargeable;
        self
    }
}

/// Pagination indicator the host renders after a search. The remote never
/// reports a total count, so the state is derived from what came back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHint {
    /// Results came back; more pages may exist.
    MorePagesUnknown,
    /// An empty page past the first one: the previous page was the last.
    LastPageReached,
    /// An empty first page: nothing matched at all.
    NoResults,
}

impl PageHint {
    pub fn from_page(page: u32, result_count: usize) -> Self {
        if result_count > 0 {
            PageHint::MorePagesUnknown
        } else if page > 1 {
            PageHint::LastPageReached
        } else {
            PageHint::NoResults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_normalizes_to_one() {
        assert_eq!(SearchQuery::new("carpenter", 0).page(), 1);
        assert_eq!(SearchQuery::new("carpenter", 1).page(), 1);
        assert_eq!(SearchQuery::new("carpenter", 7).page(), 7);
    }

    #[test]
    fn filters_default_to_absent() {
        let query = SearchQuery::new("carpenter", 1);
        assert_eq!(query.language(), "");
        assert_eq!(query.provider(), "");
        assert_eq!(query.kind(), "");
        assert!(!query.include_chargeable());
    }

    #[test]
    fn page_hint_tri_state() {
        assert_eq!(PageHint::from_page(1, 12), PageHint::MorePagesUnknown);
        assert_eq!(PageHint::from_page(5, 1), PageHint::MorePagesUnknown);
        assert_eq!(PageHint::from_page(3, 0), PageHint::LastPageReached);
        assert_eq!(PageHint::from_page(1, 0), PageHint::NoResults);
    }
}
