use reqwest::Client;

/// Shared HTTP client configuration for the product feed.
pub struct CatalogHttpClient {
    pub client: Client,
    pub feed_url: String,
    pub api_key: Option<String>,
    pub basic_auth: Option<(String, String)>,
}

impl CatalogHttpClient {
    pub fn new(
        feed_url: String,
        api_key: Option<String>,
        basic_auth: Option<(String, String)>,
    ) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            feed_url,
            api_key,
            basic_auth,
        }
    }
}
