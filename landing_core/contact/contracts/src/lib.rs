use std::future::Future;

use landing_config::MailConfigError;
use landing_models::contact::ContactRelayRequest;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Checks the submission for required fields and forwards it to the
    /// configured inbox.
    fn relay(
        &self,
        request: ContactRelayRequest,
    ) -> impl Future<Output = Result<(), ContactRelayError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactRelayError {
    #[error("Name, email or message is missing.")]
    MissingFields,
    #[error(transparent)]
    Configuration(#[from] MailConfigError),
    #[error("The mail server did not accept the message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_relay(
        mut self,
        request: ContactRelayRequest,
        result: Result<(), ContactRelayError>,
    ) -> Self {
        self.expect_relay()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
