use std::future::Future;

use landing_models::email_address::{EmailAddress, EmailAddressWithName};

/// SMTP servers on this port expect TLS from the first byte instead of an
/// upgrade via `STARTTLS`.
pub const IMPLICIT_TLS_PORT: u16 = 465;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Opens a transport for `smtp`, hands `email` over and reports whether
    /// the server accepted it. The transport is dropped afterwards.
    fn send(
        &self,
        smtp: SmtpSettings,
        email: Email,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: EmailAddressWithName,
    pub recipient: EmailAddressWithName,
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    /// Plain text body.
    pub body: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub tls: TlsMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS handshake right after connecting.
    Implicit,
    /// Plain connection, upgraded with `STARTTLS` if the server offers it.
    Opportunistic,
}

impl TlsMode {
    pub fn for_port(port: u16) -> Self {
        if port == IMPLICIT_TLS_PORT {
            Self::Implicit
        } else {
            Self::Opportunistic
        }
    }
}

impl SmtpSettings {
    pub fn new(host: String, port: u16, username: String, password: String) -> Self {
        Self {
            host,
            port,
            username,
            password,
            tls: TlsMode::for_port(port),
        }
    }
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("tls", &self.tls)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, smtp: SmtpSettings, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(smtp),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, error: &'static str) -> Self {
        self.expect_send()
            .once()
            .return_once(move |_, _| {
                Box::pin(std::future::ready(Err::<bool, _>(anyhow::anyhow!(error))))
            });
        self
    }
}
