use async_trait::async_trait;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Product;
use business::domain::catalog::source::ProductCatalogSource;

use crate::client::CatalogHttpClient;
use crate::entity::CatalogItemEntity;

/// Header carrying the feed API key, fixed by the vendor.
const API_KEY_HEADER: &str = "X-KEYALI-API";

pub struct HttpCatalogSource {
    http: CatalogHttpClient,
}

impl HttpCatalogSource {
    pub fn new(http: CatalogHttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ProductCatalogSource for HttpCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let mut request = self.http.client.get(&self.http.feed_url);

        if let Some(api_key) = &self.http.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some((user, password)) = &self.http.basic_auth {
            request = request.basic_auth(user, Some(password));
        }

        let response = request
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        let entities: Vec<CatalogItemEntity> = response
            .json()
            .await
            .map_err(|_| CatalogError::MalformedFeed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
