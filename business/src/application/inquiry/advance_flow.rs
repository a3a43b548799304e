use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inquiry::flow::InquiryFlow;
use crate::domain::inquiry::use_cases::advance_flow::{
    AdvanceInquiryFlowParams, AdvanceInquiryFlowUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;

pub struct AdvanceInquiryFlowUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AdvanceInquiryFlowUseCase for AdvanceInquiryFlowUseCaseImpl {
    async fn execute(&self, params: AdvanceInquiryFlowParams) -> InquiryFlow {
        let mut session = self.sessions.load(&params.session_id).await;
        let next = session.flow.on(params.event);

        self.logger.debug(&format!(
            "Inquiry flow for session {}: {:?} -> {:?} on {:?}",
            params.session_id, session.flow, next, params.event
        ));

        session.flow = next;
        self.sessions.save(&params.session_id, session).await;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inquiry::flow::InquiryFlowEvent;
    use crate::domain::session::model::ShopperSession;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;
    use std::collections::HashMap;
    use std::sync::Mutex;

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

    #[derive(Default)]
    pub struct FakeSessionStore {
        sessions: Mutex<HashMap<SessionId, ShopperSession>>,
    }

    #[async_trait]
    impl SessionStore for FakeSessionStore {
        async fn load(&self, session_id: &SessionId) -> ShopperSession {
            self.sessions
                .lock()
                .unwrap()
                .get(session_id)
                .cloned()
                .unwrap_or_default()
        }

        async fn save(&self, session_id: &SessionId, session: ShopperSession) {
            self.sessions
                .lock()
                .unwrap()
                .insert(session_id.clone(), session);
        }
    }

    #[tokio::test]
    async fn should_advance_and_persist_flow() {
        let sessions = Arc::new(FakeSessionStore::default());
        let use_case = AdvanceInquiryFlowUseCaseImpl {
            sessions: sessions.clone(),
            logger: mock_logger(),
        };

        let flow = use_case
            .execute(AdvanceInquiryFlowParams {
                session_id: SessionId::new("s1"),
                event: InquiryFlowEvent::OpenList,
            })
            .await;

        assert_eq!(flow, InquiryFlow::ListOpen);
        assert_eq!(
            sessions.load(&SessionId::new("s1")).await.flow,
            InquiryFlow::ListOpen
        );
    }

    #[tokio::test]
    async fn should_keep_state_on_non_applicable_event() {
        let use_case = AdvanceInquiryFlowUseCaseImpl {
            sessions: Arc::new(FakeSessionStore::default()),
            logger: mock_logger(),
        };

        let flow = use_case
            .execute(AdvanceInquiryFlowParams {
                session_id: SessionId::new("s1"),
                event: InquiryFlowEvent::Submit,
            })
            .await;

        assert_eq!(flow, InquiryFlow::Closed);
    }
}
