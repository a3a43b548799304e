use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::inquiry::errors::InquiryError;
use crate::domain::inquiry::model::{ClientDetails, Sender};
use crate::domain::shared::value_objects::{Locale, SessionId, UserId};

pub struct SubmitInquiryParams {
    pub session_id: SessionId,
    /// None for guests; client selection and creation require it.
    pub user_id: Option<UserId>,
    pub sender: Sender,
    /// A stored client to pre-fill the company block...
    pub client_id: Option<Uuid>,
    /// ...or freshly entered details, persisted before composing.
    pub new_client: Option<ClientDetails>,
    pub locale: Locale,
}

/// The composed inquiry plus its mail handoff payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedInquiry {
    pub subject: String,
    pub body: String,
    pub mailto: String,
}

#[async_trait]
pub trait SubmitInquiryUseCase: Send + Sync {
    async fn execute(&self, params: SubmitInquiryParams)
    -> Result<SubmittedInquiry, InquiryError>;
}
