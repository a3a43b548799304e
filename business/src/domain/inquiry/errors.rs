#[derive(Debug, thiserror::Error)]
pub enum InquiryError {
    #[error("inquiry.empty_list")]
    EmptyList,
    #[error("inquiry.email_form_not_open")]
    EmailFormNotOpen,
    #[error("inquiry.client_not_found")]
    ClientNotFound,
    #[error("inquiry.missing_company_identity")]
    MissingCompanyIdentity,
    #[error(transparent)]
    Client(#[from] crate::domain::client::errors::ClientError),
}
