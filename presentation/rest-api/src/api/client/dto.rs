use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::client::model::ClientRecord;

/// Request to register a client company
#[derive(Debug, Clone, Object)]
pub struct CreateClientRequest {
    /// Company name (cannot be blank)
    pub company_name: String,
    /// VAT number (cannot be blank)
    pub vat_number: String,
}

/// A stored client company
#[derive(Debug, Clone, Object)]
pub struct ClientResponse {
    /// Client unique identifier
    pub id: String,
    /// Company name
    pub company_name: String,
    /// VAT number
    pub vat_number: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<ClientRecord> for ClientResponse {
    fn from(record: ClientRecord) -> Self {
        Self {
            id: record.id.to_string(),
            company_name: record.company_name,
            vat_number: record.vat_number,
            created_at: record.created_at,
        }
    }
}
