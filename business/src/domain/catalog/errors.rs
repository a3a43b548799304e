#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("catalog.malformed_feed")]
    MalformedFeed,
}
