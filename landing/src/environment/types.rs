use landing_config::EnvMailConfigSource;
use landing_core_contact_impl::ContactServiceImpl;
use landing_email_impl::EmailServiceImpl;

// API
pub type RestServer = landing_api_rest::RestServer<Contact>;

// Config
pub type MailConfig = EnvMailConfigSource;

// Email
pub type Email = EmailServiceImpl;

// Core
pub type Contact = ContactServiceImpl<MailConfig, Email>;
