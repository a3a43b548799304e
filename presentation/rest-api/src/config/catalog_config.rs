use std::env;

/// Configuration for the external product feed
pub struct CatalogConfig {
    pub feed_url: String,
    pub api_key: Option<String>,
    pub basic_auth: Option<(String, String)>,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_FEED_URL: Product feed endpoint (required)
    /// - CATALOG_API_KEY: Vendor API key header value (optional)
    /// - CATALOG_BASIC_AUTH_USER / CATALOG_BASIC_AUTH_PASSWORD: HTTP basic
    ///   auth pair, both required for the pair to apply (optional)
    pub fn from_env() -> Self {
        let feed_url = env::var("CATALOG_FEED_URL").expect("CATALOG_FEED_URL must be set");
        let api_key = env::var("CATALOG_API_KEY").ok();
        let basic_auth = match (
            env::var("CATALOG_BASIC_AUTH_USER").ok(),
            env::var("CATALOG_BASIC_AUTH_PASSWORD").ok(),
        ) {
            (Some(user), Some(password)) => Some((user, password)),
            _ => None,
        };

        Self {
            feed_url,
            api_key,
            basic_auth,
        }
    }
}
