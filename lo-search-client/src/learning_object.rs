use crate::json_path::dotted_string;
use crate::r#static::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One catalog entry of a search response. Summaries are built fresh per
/// response item and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct LearningObjectSummary {
    #[getset(get = "pub")]
    title: String,
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    thumbnail_url: String,
    #[getset(get_copy = "pub")]
    thumbnail_width: u32,
    #[getset(get_copy = "pub")]
    thumbnail_height: u32,
    #[getset(get = "pub")]
    detail_url: String,
    #[getset(get = "pub")]
    source_url: String,
    #[getset(get_copy = "pub")]
    retrieved_at: DateTime<Utc>,
    #[getset(get = "pub")]
    author: String,
}

impl LearningObjectSummary {
    /// Map one raw search item. The gateway's preview route serves as both
    /// the detail page and the source link, so the two URLs are identical.
    pub(crate) fn from_search_item(
        item: &Value,
        base_url: &str,
        retrieved_at: DateTime<Utc>,
    ) -> Self {
        let id = dotted_string(item, "id").unwrap_or_default();
        let preview_url = format!("{base_url}/lo/{id}/preview");
        Self {
            title: dotted_string(item, "title").unwrap_or_default(),
            description: dotted_string(item, "description").unwrap_or_default(),
            thumbnail_url: dotted_string(item, "picture.full_width").unwrap_or_default(),
            thumbnail_width: THUMBNAIL_WIDTH,
            thumbnail_height: THUMBNAIL_HEIGHT,
            detail_url: preview_url.clone(),
            source_url: preview_url,
            retrieved_at,
            author: dotted_string(item, "provider").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_one_item() {
        let item = json!({
            "id": "lo-42",
            "title": "Woodworking basics",
            "description": "An introduction.",
            "picture": {"full_width": "https://cdn.example.com/lo-42.jpg"},
            "provider": "Atelier",
        });
        let retrieved_at = Utc::now();
        let summary = LearningObjectSummary::from_search_item(&item, "https://base/v3", retrieved_at);

        assert_eq!(summary.title(), "Woodworking basics");
        assert_eq!(summary.thumbnail_url(), "https://cdn.example.com/lo-42.jpg");
        assert_eq!(summary.thumbnail_width(), 150);
        assert_eq!(summary.thumbnail_height(), 100);
        assert_eq!(summary.detail_url(), "https://base/v3/lo/lo-42/preview");
        assert_eq!(summary.detail_url(), summary.source_url());
        assert_eq!(summary.retrieved_at(), retrieved_at);
        assert_eq!(summary.author(), "Atelier");
    }

    #[test]
    fn missing_fields_degrade_to_empty() {
        let summary = LearningObjectSummary::from_search_item(&json!({}), "https://base/v3", Utc::now());
        assert_eq!(summary.title(), "");
        assert_eq!(summary.author(), "");
        assert_eq!(summary.detail_url(), "https://base/v3/lo//preview");
    }
}
