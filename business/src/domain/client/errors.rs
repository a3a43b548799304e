#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("client.company_name_empty")]
    CompanyNameEmpty,
    #[error("client.vat_number_empty")]
    VatNumberEmpty,
    #[error("client.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
