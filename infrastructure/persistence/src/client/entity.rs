use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::client::model::ClientRecord;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ClientEntity {
    pub id: Uuid,
    pub user_id: String,
    pub company_name: String,
    pub vat_number: String,
    pub created_at: DateTime<Utc>,
}

impl ClientEntity {
    pub fn into_domain(self) -> ClientRecord {
        ClientRecord::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.company_name,
            self.vat_number,
            self.created_at,
        )
    }
}
