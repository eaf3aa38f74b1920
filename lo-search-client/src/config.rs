use getset::Getters;

/// Host-supplied settings for one integration instance. An absent or blank
/// API key means the integration is disabled rather than a client that
/// issues doomed requests.
#[derive(Debug, Clone, Default, Getters)]
#[get = "pub"]
pub struct ClientConfig {
    api_key: String,
    requested_lang: String,
    base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, requested_lang: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            requested_lang: requested_lang.into(),
            base_url: None,
        }
    }

    /// Target another gateway variant instead of the public default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_disables_the_integration() {
        assert!(!ClientConfig::new("", "fr").is_enabled());
        assert!(!ClientConfig::new("   ", "fr").is_enabled());
        assert!(ClientConfig::new("key", "fr").is_enabled());
    }
}
