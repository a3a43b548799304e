use async_trait::async_trait;

use crate::domain::inquiry::flow::{InquiryFlow, InquiryFlowEvent};
use crate::domain::shared::value_objects::SessionId;

pub struct AdvanceInquiryFlowParams {
    pub session_id: SessionId,
    pub event: InquiryFlowEvent,
}

/// Infallible: non-applicable events leave the flow where it is.
#[async_trait]
pub trait AdvanceInquiryFlowUseCase: Send + Sync {
    async fn execute(&self, params: AdvanceInquiryFlowParams) -> InquiryFlow;
}
