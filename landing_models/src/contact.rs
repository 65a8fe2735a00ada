use serde::{Deserialize, Serialize};

/// Path of the endpoint that relays contact form submissions.
pub const CONTACT_PATH: &str = "/api/contact";

/// A contact form submission as sent by the website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// An inbound submission before the server checked it for required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRelayRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl From<ContactSubmission> for ContactRelayRequest {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: Some(value.name),
            email: Some(value.email),
            phone: value.phone,
            message: Some(value.message),
        }
    }
}
