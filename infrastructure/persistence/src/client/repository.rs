use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::client::model::ClientRecord;
use business::domain::client::repository::ClientRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::ClientEntity;

pub struct ClientRepositoryPostgres {
    pool: PgPool,
}

impl ClientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    // Unique-constraint violations map to Duplicated so the caller can
    // distinguish "already saved" from an outage.
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    RepositoryError::DatabaseError
}

#[async_trait]
impl ClientRepository for ClientRepositoryPostgres {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ClientRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, ClientEntity>(
            "SELECT id, user_id, company_name, vat_number, created_at FROM clients WHERE user_id = $1 ORDER BY company_name ASC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, record: &ClientRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO clients (id, user_id, company_name, vat_number, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(record.user_id.as_str())
        .bind(&record.company_name)
        .bind(&record.vat_number)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
