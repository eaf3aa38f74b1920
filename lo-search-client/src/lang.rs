use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Display language for localized catalog labels. The remote supports a
/// closed set of codes; anything outside it falls back to French, the
/// catalog's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayLanguage {
    #[default]
    Fr,
    En,
}

impl DisplayLanguage {
    /// Resolve a requested language code. The match is case-sensitive, like
    /// the codes the remote serves.
    pub fn resolve(requested: &str) -> Self {
        Self::from_str(requested).unwrap_or_default()
    }
}
