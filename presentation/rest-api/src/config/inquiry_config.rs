/// Configuration for inquiry mail handoff
pub struct InquiryConfig {
    /// Fixed destination address for composed inquiries
    pub email_to: String,
}

impl InquiryConfig {
    pub fn from_env() -> Self {
        Self {
            email_to: std::env::var("INQUIRY_EMAIL_TO").expect("INQUIRY_EMAIL_TO must be set"),
        }
    }
}
