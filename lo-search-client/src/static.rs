use lazy_static::lazy_static;
use std::time::Duration;

/// Public catalog gateway.
pub const GATEWAY_URL: &str = "https://api.gateway.inokufu.com";

/// Versioned learning-object API prefix under the gateway.
pub(crate) const LO_API_PATH: &str = "learningobject/v3";

/// Fixed page size of the remote search endpoint.
pub const SEARCH_PAGE_SIZE: u32 = 12;

/// Dimensions the host renders result thumbnails at.
pub(crate) const THUMBNAIL_WIDTH: u32 = 150;
pub(crate) const THUMBNAIL_HEIGHT: u32 = 100;

/// Cap on one HTTP round trip. The remote mandates no particular value.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

lazy_static! {
    /// Base URL every endpoint path is appended to. Clients can override it
    /// to target another gateway variant.
    pub(crate) static ref DEFAULT_BASE_URL: String = format!("{GATEWAY_URL}/{LO_API_PATH}");
}
