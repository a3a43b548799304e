use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::client::model::ClientRecord;
use crate::domain::client::repository::ClientRepository;
use crate::domain::inquiry::composer;
use crate::domain::inquiry::errors::InquiryError;
use crate::domain::inquiry::flow::InquiryFlowEvent;
use crate::domain::inquiry::model::CompanyIdentity;
use crate::domain::inquiry::use_cases::submit::{
    SubmitInquiryParams, SubmitInquiryUseCase, SubmittedInquiry,
};
use crate::domain::logger::Logger;
use crate::domain::session::store::SessionStore;

pub struct SubmitInquiryUseCaseImpl {
    pub sessions: Arc<dyn SessionStore>,
    pub clients: Arc<dyn ClientRepository>,
    pub logger: Arc<dyn Logger>,
    /// Fixed destination address, per-deployment configuration.
    pub destination: String,
}

impl SubmitInquiryUseCaseImpl {
    async fn resolve_identity(
        &self,
        params: &SubmitInquiryParams,
    ) -> Result<Option<CompanyIdentity>, InquiryError> {
        if let Some(details) = &params.new_client {
            // New-client subform: persist first, compose from the stored
            // record. Guests compose from the transient details only.
            if let Some(user_id) = &params.user_id {
                let record = ClientRecord::new(
                    user_id.clone(),
                    details.company_name.clone(),
                    details.vat_number.clone(),
                )?;
                self.clients.save(&record).await.map_err(|err| {
                    self.logger
                        .error(&format!("Client creation rejected: {err}"));
                    InquiryError::Client(err.into())
                })?;
                self.logger
                    .info(&format!("Client created for inquiry: {}", record.id));
                return Ok(Some(CompanyIdentity::from(&record)));
            }
            return Ok(Some(CompanyIdentity::from(details)));
        }

        if let Some(client_id) = params.client_id {
            let user_id = params.user_id.as_ref().ok_or(InquiryError::ClientNotFound)?;
            let records = self
                .clients
                .list_for_user(user_id)
                .await
                .map_err(|_| InquiryError::ClientNotFound)?;
            let record = records
                .iter()
                .find(|r| r.id == client_id)
                .ok_or(InquiryError::ClientNotFound)?;
            return Ok(Some(CompanyIdentity::from(record)));
        }

        Ok(None)
    }
}

#[async_trait]
impl SubmitInquiryUseCase for SubmitInquiryUseCaseImpl {
    async fn execute(
        &self,
        params: SubmitInquiryParams,
    ) -> Result<SubmittedInquiry, InquiryError> {
        let mut session = self.sessions.load(&params.session_id).await;

        if !session.flow.is_email_form_open() {
            return Err(InquiryError::EmailFormNotOpen);
        }
        if session.list.is_empty() {
            return Err(InquiryError::EmptyList);
        }

        // A rejected client write propagates before any session mutation,
        // so the form keeps its entered values.
        let identity = self.resolve_identity(&params).await?;

        let inquiry = composer::compose(
            &session.list.items,
            identity.as_ref(),
            &params.sender,
            params.locale,
        );
        let mailto = composer::mailto_uri(&self.destination, &inquiry);

        session.flow = session.flow.on(InquiryFlowEvent::Submit);
        self.sessions.save(&params.session_id, session).await;

        self.logger.info(&format!(
            "Inquiry composed for session {} ({} chars)",
            params.session_id,
            inquiry.body.len()
        ));

        Ok(SubmittedInquiry {
            subject: inquiry.subject,
            body: inquiry.body,
            mailto,
        })
    }
}
