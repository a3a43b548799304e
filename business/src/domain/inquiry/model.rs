use crate::domain::client::model::ClientRecord;

/// Transient new-client form payload, scoped to one inquiry submission
/// and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetails {
    pub company_name: String,
    pub vat_number: String,
}

/// Company identity block of the composed message, resolved from either
/// a stored client record or freshly entered details.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyIdentity {
    pub company_name: String,
    pub vat_number: String,
}

impl From<&ClientRecord> for CompanyIdentity {
    fn from(record: &ClientRecord) -> Self {
        Self {
            company_name: record.company_name.clone(),
            vat_number: record.vat_number.clone(),
        }
    }
}

impl From<&ClientDetails> for CompanyIdentity {
    fn from(details: &ClientDetails) -> Self {
        Self {
            company_name: details.company_name.clone(),
            vat_number: details.vat_number.clone(),
        }
    }
}

/// Who signs the message.
#[derive(Debug, Clone, PartialEq)]
pub enum Sender {
    User { email: String },
    Guest,
}

/// A composed inquiry before mail handoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub subject: String,
    pub body: String,
}
