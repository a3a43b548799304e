use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::inquiry::flow::{InquiryFlow, InquiryFlowEvent};
use business::domain::inquiry::use_cases::submit::SubmittedInquiry;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum FlowEventDto {
    #[oai(rename = "open_list")]
    OpenList,
    #[oai(rename = "close")]
    Close,
    #[oai(rename = "open_email_form")]
    OpenEmailForm,
    #[oai(rename = "toggle_new_client")]
    ToggleNewClient,
    #[oai(rename = "cancel")]
    Cancel,
    #[oai(rename = "submit")]
    Submit,
}

impl From<FlowEventDto> for InquiryFlowEvent {
    fn from(dto: FlowEventDto) -> Self {
        match dto {
            FlowEventDto::OpenList => InquiryFlowEvent::OpenList,
            FlowEventDto::Close => InquiryFlowEvent::Close,
            FlowEventDto::OpenEmailForm => InquiryFlowEvent::OpenEmailForm,
            FlowEventDto::ToggleNewClient => InquiryFlowEvent::ToggleNewClient,
            FlowEventDto::Cancel => InquiryFlowEvent::Cancel,
            FlowEventDto::Submit => InquiryFlowEvent::Submit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum FlowStateDto {
    #[oai(rename = "closed")]
    Closed,
    #[oai(rename = "list_open")]
    ListOpen,
    #[oai(rename = "email_form_open")]
    EmailFormOpen,
}

/// Request to advance the inquiry flow
#[derive(Debug, Clone, Object)]
pub struct AdvanceFlowRequest {
    pub event: FlowEventDto,
}

/// The inquiry flow after a transition
#[derive(Debug, Clone, Object)]
pub struct FlowStateResponse {
    pub state: FlowStateDto,
    /// Whether the new-client subform is showing inside the email form
    pub new_client_form: bool,
}

impl From<InquiryFlow> for FlowStateResponse {
    fn from(flow: InquiryFlow) -> Self {
        match flow {
            InquiryFlow::Closed => Self {
                state: FlowStateDto::Closed,
                new_client_form: false,
            },
            InquiryFlow::ListOpen => Self {
                state: FlowStateDto::ListOpen,
                new_client_form: false,
            },
            InquiryFlow::EmailFormOpen { new_client } => Self {
                state: FlowStateDto::EmailFormOpen,
                new_client_form: new_client,
            },
        }
    }
}

/// Freshly entered company details for the inquiry
#[derive(Debug, Clone, Object)]
pub struct NewClientDto {
    pub company_name: String,
    pub vat_number: String,
}

/// Request to submit an inquiry for the session's shopping list
#[derive(Debug, Clone, Object)]
pub struct SubmitInquiryRequest {
    /// A stored client to pre-fill the company block
    #[oai(skip_serializing_if_is_none)]
    pub client_id: Option<String>,
    /// Freshly entered details, persisted for signed-in users
    #[oai(skip_serializing_if_is_none)]
    pub new_client: Option<NewClientDto>,
}

/// The composed inquiry plus its mail handoff payload
#[derive(Debug, Clone, Object)]
pub struct SubmitInquiryResponse {
    pub subject: String,
    pub body: String,
    /// `mailto:` URI the client opens to hand off to the mail app
    pub mailto: String,
}

impl From<SubmittedInquiry> for SubmitInquiryResponse {
    fn from(inquiry: SubmittedInquiry) -> Self {
        Self {
            subject: inquiry.subject,
            body: inquiry.body,
            mailto: inquiry.mailto,
        }
    }
}
