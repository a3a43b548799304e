use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ClientError;
use crate::domain::shared::value_objects::UserId;

/// A saved company profile, owned by one user, used to pre-fill
/// inquiry composition.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub company_name: String,
    pub vat_number: String,
    pub created_at: DateTime<Utc>,
}

impl ClientRecord {
    pub fn new(
        user_id: UserId,
        company_name: String,
        vat_number: String,
    ) -> Result<Self, ClientError> {
        if company_name.trim().is_empty() {
            return Err(ClientError::CompanyNameEmpty);
        }
        if vat_number.trim().is_empty() {
            return Err(ClientError::VatNumberEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            company_name,
            vat_number,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        company_name: String,
        vat_number: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            company_name,
            vat_number,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_record_when_fields_valid() {
        let record = ClientRecord::new(
            UserId::new("user-1"),
            "Acme".to_string(),
            "FR40303265045".to_string(),
        );

        assert!(record.is_ok());
        let record = record.unwrap();
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.vat_number, "FR40303265045");
    }

    #[test]
    fn should_reject_blank_company_name() {
        let result = ClientRecord::new(
            UserId::new("user-1"),
            "   ".to_string(),
            "FR40303265045".to_string(),
        );

        assert!(matches!(result.unwrap_err(), ClientError::CompanyNameEmpty));
    }

    #[test]
    fn should_reject_blank_vat_number() {
        let result = ClientRecord::new(UserId::new("user-1"), "Acme".to_string(), "".to_string());

        assert!(matches!(result.unwrap_err(), ClientError::VatNumberEmpty));
    }

    #[test]
    fn should_generate_distinct_ids() {
        let a = ClientRecord::new(UserId::new("u"), "A".to_string(), "V1".to_string()).unwrap();
        let b = ClientRecord::new(UserId::new("u"), "B".to_string(), "V2".to_string()).unwrap();

        assert_ne!(a.id, b.id);
    }
}
