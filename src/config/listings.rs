use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

// Reelly listings search API
pub const LISTINGS_API_URL: &str =
    "https://search-listings-production.up.railway.app/v1/properties";

pub const LISTINGS_API_TIMEOUT: Duration = Duration::from_secs(30);

/// `None` when `REELLY_API_KEY` is unset or blank.
pub static LISTINGS_API_KEY: Lazy<Option<String>> = Lazy::new(|| {
    env::var("REELLY_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
});
