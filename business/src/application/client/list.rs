use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::model::ClientRecord;
use crate::domain::client::repository::ClientRepository;
use crate::domain::client::use_cases::list::{ListClientsParams, ListClientsUseCase};
use crate::domain::logger::Logger;

pub struct ListClientsUseCaseImpl {
    pub repository: Arc<dyn ClientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListClientsUseCase for ListClientsUseCaseImpl {
    async fn execute(&self, params: ListClientsParams) -> Vec<ClientRecord> {
        match self.repository.list_for_user(&params.user_id).await {
            Ok(records) => {
                self.logger.info(&format!(
                    "Retrieved {} clients for user {}",
                    records.len(),
                    params.user_id
                ));
                records
            }
            Err(err) => {
                // Fail-open: listing degrades to an empty directory.
                self.logger.error(&format!("Client listing failed: {err}"));
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ClientRepo {}

        #[async_trait]
        impl ClientRepository for ClientRepo {
            async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<ClientRecord>, RepositoryError>;
            async fn save(&self, record: &ClientRecord) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_user_clients() {
        let mut mock_repo = MockClientRepo::new();
        mock_repo.expect_list_for_user().returning(|user_id| {
            Ok(vec![
                ClientRecord::from_repository(
                    Uuid::new_v4(),
                    user_id.clone(),
                    "Acme".to_string(),
                    "FR1".to_string(),
                    Utc::now(),
                ),
                ClientRecord::from_repository(
                    Uuid::new_v4(),
                    user_id.clone(),
                    "Zenith".to_string(),
                    "FR2".to_string(),
                    Utc::now(),
                ),
            ])
        });

        let use_case = ListClientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let clients = use_case
            .execute(ListClientsParams {
                user_id: UserId::new("user-1"),
            })
            .await;

        assert_eq!(clients.len(), 2);
    }

    #[tokio::test]
    async fn should_degrade_to_empty_on_repository_error() {
        let mut mock_repo = MockClientRepo::new();
        mock_repo
            .expect_list_for_user()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ListClientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let clients = use_case
            .execute(ListClientsParams {
                user_id: UserId::new("user-1"),
            })
            .await;

        assert!(clients.is_empty());
    }
}
