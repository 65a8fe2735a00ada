use landing_core_contact_impl::ContactServiceImpl;
use types::{Contact, Email, MailConfig, RestServer};

pub mod types;

/// Wires the production implementations together.
pub fn rest_server() -> RestServer {
    let contact: Contact = ContactServiceImpl::new(MailConfig::default(), Email::default());
    RestServer::new(contact)
}
