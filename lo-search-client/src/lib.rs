mod cache;
mod config;
mod error;
mod filter;
mod json_path;
mod lang;
mod learning_object;
mod search_query;
mod session;
mod r#static;
mod transport;


use chrono::Utc;
use filter::format_options;
use r#static::{DEFAULT_BASE_URL, SEARCH_PAGE_SIZE};
use std::sync::Arc;
use utils::query::QueryParams;

pub use cache::{FilterListCache, KeyValueStore, MemoryStore, SharedStore};
pub use config::ClientConfig;
pub use error::Error;
pub use error::ErrorKind;
pub use filter::{relabel_placeholder, FilterCategory, FilterOption};
pub use json_path::{dotted_get, dotted_string};
pub use lang::DisplayLanguage;
pub use learning_object::LearningObjectSummary;
pub use search_query::{PageHint, SearchQuery};
pub use session::{field_key, SessionStore};
pub use transport::{RawResponse, SurfTransport, Transport};

/// Client for the learning-object catalog API: filter lists, paginated
/// search, and an optional host-backed cache for the filter lists.
#[derive(Clone)]
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    cache: Option<FilterListCache>,
    api_key: String,
    lang: DisplayLanguage,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the public gateway. The requested display
    /// language falls back to the catalog default when unsupported.
    pub fn new(api_key: impl Into<String>, requested_lang: &str) -> Self {
        Self::with_transport(api_key, requested_lang, Arc::new(SurfTransport::new()))
    }

    /// Create a client from host configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut client = Self::new(config.api_key().trim(), config.requested_lang());
        if let Some(base_url) = config.base_url() {
            client.base_url = base_url.trim_end_matches('/').to_string();
        }
        client
    }

    /// Create a client over a custom transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        requested_lang: &str,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            transport,
            cache: None,
            api_key: api_key.into(),
            lang: DisplayLanguage::resolve(requested_lang),
            base_url: DEFAULT_BASE_URL.clone(),
        }
    }

    /// Enable filter-list caching through a host key/value store.
    pub fn with_store(mut self, store: SharedStore) -> Self {
        self.cache = Some(FilterListCache::new(store));
        self
    }

    pub fn lang(&self) -> DisplayLanguage {
        self.lang
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the learning-object type list, labels localized to the client
    /// language.
    pub async fn types(&self) -> Result<Vec<FilterOption>, Error> {
        let json = self.api_call("type", String::new()).await?;
        Ok(format_options(&json, "id_type", &format!("name.{}", self.lang)))
    }

    /// Fetch the provider list. Provider names are not localized.
    pub async fn providers(&self) -> Result<Vec<FilterOption>, Error> {
        let json = self.api_call("provider", String::new()).await?;
        Ok(format_options(&json, "id_provider", "name"))
    }

    /// Fetch the content-language list, labels localized to the client
    /// language.
    pub async fn languages(&self) -> Result<Vec<FilterOption>, Error> {
        let json = self.api_call("lang", String::new()).await?;
        Ok(format_options(&json, "id_lang", &format!("name.{}", self.lang)))
    }

    /// One filter list, through the host store when one is configured. The
    /// returned list is the raw stored form: the synthetic first option
    /// still carries its empty label.
    pub async fn filter_options(
        &self,
        category: FilterCategory,
    ) -> Result<Vec<FilterOption>, Error> {
        match &self.cache {
            Some(cache) => cache.get_or_fetch(self, category).await,
            None => self.fetch_filter(category).await,
        }
    }

    /// One filter list with the synthetic first option relabeled to the
    /// given placeholder. The relabeling is applied after every lookup,
    /// cache hits included; stored lists are never relabeled.
    pub async fn filter_options_labeled(
        &self,
        category: FilterCategory,
        placeholder: &str,
    ) -> Result<Vec<FilterOption>, Error> {
        let mut options = self.filter_options(category).await?;
        relabel_placeholder(&mut options, placeholder);
        Ok(options)
    }

    pub(crate) async fn fetch_filter(
        &self,
        category: FilterCategory,
    ) -> Result<Vec<FilterOption>, Error> {
        match category {
            FilterCategory::Type => self.types().await,
            FilterCategory::Provider => self.providers().await,
            FilterCategory::Language => self.languages().await,
        }
    }

    /// Search the catalog. Results are never cached; all summaries of one
    /// response share a single retrieval timestamp.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<LearningObjectSummary>, Error> {
        let mut args = QueryParams::new();
        args.push("query", urlencoding::encode(query.keyword()).into_owned());
        args.push("lang", query.language());
        args.push("provider", query.provider());
        args.push("type", query.kind());
        args.push("limit", SEARCH_PAGE_SIZE.to_string());
        args.push("page", (query.page() - 1).to_string());
        // The remote distinguishes an absent flag from an explicit false:
        // the flag is only ever sent when chargeable content is excluded.
        if !query.include_chargeable() {
            args.push("free", "true");
        }

        let json = self.api_call("search", args.to_query_string()).await?;
        let retrieved_at = Utc::now();
        let items = json.as_array().map(Vec::as_slice).unwrap_or_default();
        Ok(items
            .iter()
            .map(|item| LearningObjectSummary::from_search_item(item, &self.base_url, retrieved_at))
            .collect())
    }

    async fn api_call(&self, endpoint: &str, query_args: String) -> Result<serde_json::Value, Error> {
        let url = format!("{}/{}{}", self.base_url, endpoint, query_args);
        let response = self.transport.get(&url, &self.api_key).await?;

        if !response.is_success() || response.body().trim().is_empty() {
            let body = response.body().trim();
            let message = if body.is_empty() {
                "empty response body".to_string()
            } else {
                body.to_string()
            };
            return Err(Error::from(ErrorKind::Remote {
                status: response.status(),
                message,
            }));
        }

        Ok(serde_json::from_str(response.body())?)
    }
}
