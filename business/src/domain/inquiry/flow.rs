/// UI-facing inquiry flow: closed -> list open -> email form open, with
/// an optional new-client subform inside the email form. Events that do
/// not apply in the current state are identity transitions, matching
/// the reducer's unknown-action semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryFlow {
    Closed,
    ListOpen,
    EmailFormOpen { new_client: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryFlowEvent {
    OpenList,
    Close,
    OpenEmailForm,
    ToggleNewClient,
    /// Back out of the email form without composing.
    Cancel,
    /// Terminal: composition happened, return to the open list.
    Submit,
}

impl InquiryFlow {
    pub fn on(self, event: InquiryFlowEvent) -> InquiryFlow {
        use InquiryFlow::*;
        use InquiryFlowEvent::*;

        match (self, event) {
            (Closed, OpenList) => ListOpen,
            (ListOpen, Close) => Closed,
            (ListOpen, OpenEmailForm) => EmailFormOpen { new_client: false },
            (EmailFormOpen { new_client }, ToggleNewClient) => EmailFormOpen {
                new_client: !new_client,
            },
            (EmailFormOpen { .. }, Cancel) => ListOpen,
            (EmailFormOpen { .. }, Submit) => ListOpen,
            (EmailFormOpen { .. }, Close) => Closed,
            (state, _) => state,
        }
    }

    pub fn is_email_form_open(&self) -> bool {
        matches!(self, InquiryFlow::EmailFormOpen { .. })
    }
}

impl Default for InquiryFlow {
    fn default() -> Self {
        InquiryFlow::Closed
    }
}
