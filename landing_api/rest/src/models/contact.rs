use landing_models::contact::ContactRelayRequest;
use serde::Deserialize;

/// Body of a contact form submission. Every field is optional here so that
/// missing fields are reported by the relay instead of the json extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Full name of the visitor
    pub name: Option<String>,
    /// Email address of the visitor
    pub email: Option<String>,
    /// Masked phone number, e.g. `(11) 98765-4321`
    pub phone: Option<String>,
    /// Free text message
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactRelayRequest {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
        }
    }
}
