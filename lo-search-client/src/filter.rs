use crate::json_path::dotted_string;
use getset::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};

/// One selectable entry of a filter drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[get = "pub"]
pub struct FilterOption {
    value: String,
    label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The synthetic "no filter selected" entry every formatted list starts
    /// with.
    pub fn empty() -> Self {
        Self::new("", "")
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

/// The dimensions a search can be narrowed by. The lowercase rendering
/// doubles as the key the matching filter list is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FilterCategory {
    Type,
    Provider,
    Language,
}

impl FilterCategory {
    pub fn cache_key(&self) -> &'static str {
        match self {
            FilterCategory::Type => "type",
            FilterCategory::Provider => "provider",
            FilterCategory::Language => "language",
        }
    }
}

/// Shape a raw list response into drop-down entries, synthetic empty option
/// first. Items missing the addressed fields degrade to empty strings
/// instead of dropping out, keeping list positions stable.
pub(crate) fn format_options(json: &Value, value_path: &str, label_path: &str) -> Vec<FilterOption> {
    let mut options = vec![FilterOption::empty()];
    for item in json.as_array().into_iter().flatten() {
        options.push(FilterOption::new(
            dotted_string(item, value_path).unwrap_or_default(),
            dotted_string(item, label_path).unwrap_or_default(),
        ));
    }
    options
}

/// Overwrite the label of the synthetic first option. Hosts apply this
/// after every filter-list lookup; the stored lists keep the empty label.
pub fn relabel_placeholder(options: &mut [FilterOption], placeholder: &str) {
    if let Some(first) = options.first_mut() {
        first.set_label(placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formatted_list_starts_with_one_empty_option() {
        let json = json!([
            {"id_type": "mooc", "name": {"fr": "MOOC", "en": "MOOC"}},
            {"id_type": "video", "name": {"fr": "Vidéo", "en": "Video"}},
        ]);
        let options = format_options(&json, "id_type", "name.en");
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], FilterOption::empty());
        assert_eq!(options[1], FilterOption::new("mooc", "MOOC"));
        assert_eq!(options[2], FilterOption::new("video", "Video"));
    }

    #[test]
    fn empty_input_still_yields_the_empty_option() {
        let options = format_options(&json!([]), "id_type", "name.en");
        assert_eq!(options, vec![FilterOption::empty()]);
    }

    #[test]
    fn missing_fields_degrade_to_empty_strings() {
        let json = json!([{"id_type": "quiz"}]);
        let options = format_options(&json, "id_type", "name.en");
        assert_eq!(options[1], FilterOption::new("quiz", ""));
    }

    #[test]
    fn relabel_touches_only_the_first_option() {
        let mut options = format_options(
            &json!([{"id_lang": "fr", "name": {"en": "French"}}]),
            "id_lang",
            "name.en",
        );
        relabel_placeholder(&mut options, "Default language");
        assert_eq!(options[0].label(), "Default language");
        assert_eq!(options[0].value(), "");
        assert_eq!(options[1].label(), "French");
    }

    #[test]
    fn category_renders_as_its_cache_key() {
        assert_eq!(FilterCategory::Type.to_string(), "type");
        assert_eq!(FilterCategory::Language.cache_key(), "language");
    }
}
