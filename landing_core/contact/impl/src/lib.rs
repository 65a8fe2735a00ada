use anyhow::Context;
use landing_config::{MailConfigSource, MailRelayConfig};
use landing_core_contact_contracts::{ContactRelayError, ContactService};
use landing_email_contracts::{Email, EmailService, SmtpSettings};
use landing_models::contact::{ContactRelayRequest, ContactSubmission};
use tracing::{debug, warn};

pub const SUBJECT: &str = "Novo contato pelo site";

/// Shown instead of the phone number if the visitor left it blank.
pub const PHONE_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<MailConfig, EmailS> {
    mail_config: MailConfig,
    email: EmailS,
}

impl<MailConfig, EmailS> ContactServiceImpl<MailConfig, EmailS> {
    pub fn new(mail_config: MailConfig, email: EmailS) -> Self {
        Self { mail_config, email }
    }
}

impl<MailConfig, EmailS> ContactService for ContactServiceImpl<MailConfig, EmailS>
where
    MailConfig: MailConfigSource,
    EmailS: EmailService,
{
    async fn relay(&self, request: ContactRelayRequest) -> Result<(), ContactRelayError> {
        let submission = require_fields(request).ok_or(ContactRelayError::MissingFields)?;

        let config = self.mail_config.load()?;
        let smtp = SmtpSettings::new(
            config.host.clone(),
            config.port,
            config.user.clone(),
            config.password.clone(),
        );
        let email = build_email(&config, submission)?;

        debug!(tls = ?smtp.tls, "relaying contact message");
        if !self.email.send(smtp, email).await? {
            warn!("smtp server rejected contact message");
            return Err(ContactRelayError::Send);
        }

        Ok(())
    }
}

/// Server side counterpart of the form validation: only checks that name,
/// email and message are present and non-empty.
fn require_fields(request: ContactRelayRequest) -> Option<ContactSubmission> {
    let present = |value: Option<String>| value.filter(|value| !value.is_empty());

    Some(ContactSubmission {
        name: present(request.name)?,
        email: present(request.email)?,
        phone: present(request.phone),
        message: present(request.message)?,
    })
}

fn build_email(config: &MailRelayConfig, submission: ContactSubmission) -> anyhow::Result<Email> {
    let body = format!(
        "Nome: {}\nE-mail: {}\nTelefone: {}\n\n{}",
        submission.name,
        submission.email,
        submission.phone.as_deref().unwrap_or(PHONE_PLACEHOLDER),
        submission.message,
    );

    // The submitter's address stays in the body even if it cannot be used
    // as Reply-To.
    let reply_to = submission.email.parse().ok();
    if reply_to.is_none() {
        debug!(email = %submission.email, "omitting reply-to for invalid submitter email");
    }

    Ok(Email {
        from: config.from.parse().context("Invalid SMTP_FROM address")?,
        recipient: config.to.parse().context("Invalid SMTP_TO address")?,
        reply_to,
        subject: SUBJECT.into(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use landing_config::{mail::SMTP_PASS, MailConfigError, MockMailConfigSource};
    use landing_email_contracts::{MockEmailService, TlsMode};
    use landing_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(port: u16) -> MailRelayConfig {
        MailRelayConfig {
            host: "smtp.example.com".into(),
            port,
            user: "site".into(),
            password: "hunter2".into(),
            from: "Site <no-reply@example.com>".into(),
            to: "contato@example.com".into(),
        }
    }

    fn request() -> ContactRelayRequest {
        ContactRelayRequest {
            name: Some("Maria Silva".into()),
            email: Some("maria@example.com".into()),
            phone: Some("(11) 98765-4321".into()),
            message: Some("Gostaria de um orçamento para um site.".into()),
        }
    }

    fn expected_smtp(port: u16) -> SmtpSettings {
        SmtpSettings::new("smtp.example.com".into(), port, "site".into(), "hunter2".into())
    }

    fn expected_email(phone: &str) -> Email {
        Email {
            from: "Site <no-reply@example.com>".parse().unwrap(),
            recipient: "contato@example.com".parse().unwrap(),
            reply_to: Some("maria@example.com".parse().unwrap()),
            subject: "Novo contato pelo site".into(),
            body: format!(
                "Nome: Maria Silva\nE-mail: maria@example.com\nTelefone: {phone}\n\nGostaria de \
                 um orçamento para um site."
            ),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let mail_config = MockMailConfigSource::new().with_load(Ok(config(587)));
        let email = MockEmailService::new().with_send(
            expected_smtp(587),
            expected_email("(11) 98765-4321"),
            true,
        );

        let sut = ContactServiceImpl::new(mail_config, email);

        // Act
        let result = sut.relay(request()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn ok_without_phone() {
        for phone in [None, Some(String::new())] {
            // Arrange
            let mail_config = MockMailConfigSource::new().with_load(Ok(config(587)));
            let email =
                MockEmailService::new().with_send(expected_smtp(587), expected_email("-"), true);

            let sut = ContactServiceImpl::new(mail_config, email);

            // Act
            let result = sut.relay(ContactRelayRequest { phone, ..request() }).await;

            // Assert
            result.unwrap();
        }
    }

    #[tokio::test]
    async fn implicit_tls_on_port_465() {
        // Arrange
        let mail_config = MockMailConfigSource::new().with_load(Ok(config(465)));
        let smtp = expected_smtp(465);
        assert_eq!(smtp.tls, TlsMode::Implicit);
        let email =
            MockEmailService::new().with_send(smtp, expected_email("(11) 98765-4321"), true);

        let sut = ContactServiceImpl::new(mail_config, email);

        // Act
        let result = sut.relay(request()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn missing_fields() {
        let cases = [
            ContactRelayRequest {
                name: Some(String::new()),
                ..request()
            },
            ContactRelayRequest {
                email: None,
                ..request()
            },
            ContactRelayRequest {
                message: Some(String::new()),
                ..request()
            },
            ContactRelayRequest::default(),
        ];

        for request in cases {
            // Arrange
            let sut = ContactServiceImpl::new(MockMailConfigSource::new(), MockEmailService::new());

            // Act
            let result = sut.relay(request).await;

            // Assert
            assert_matches!(result, Err(ContactRelayError::MissingFields));
        }
    }

    #[tokio::test]
    async fn missing_configuration() {
        // Arrange
        let mail_config = MockMailConfigSource::new()
            .with_load(Err(MailConfigError::Missing(vec![SMTP_PASS])));

        let sut = ContactServiceImpl::new(mail_config, MockEmailService::new());

        // Act
        let result = sut.relay(request()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactRelayError::Configuration(MailConfigError::Missing(_)))
        );
    }

    #[tokio::test]
    async fn rejected_by_server() {
        // Arrange
        let mail_config = MockMailConfigSource::new().with_load(Ok(config(587)));
        let email = MockEmailService::new().with_send(
            expected_smtp(587),
            expected_email("(11) 98765-4321"),
            false,
        );

        let sut = ContactServiceImpl::new(mail_config, email);

        // Act
        let result = sut.relay(request()).await;

        // Assert
        assert_matches!(result, Err(ContactRelayError::Send));
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let mail_config = MockMailConfigSource::new().with_load(Ok(config(587)));
        let email = MockEmailService::new().with_send_error("connection refused");

        let sut = ContactServiceImpl::new(mail_config, email);

        // Act
        let result = sut.relay(request()).await;

        // Assert
        assert_matches!(result, Err(ContactRelayError::Other(_)));
    }

    #[tokio::test]
    async fn invalid_submitter_email_is_sent_without_reply_to() {
        // Arrange
        let mail_config = MockMailConfigSource::new().with_load(Ok(config(587)));
        let email = MockEmailService::new().with_send(
            expected_smtp(587),
            Email {
                reply_to: None,
                body: "Nome: Maria Silva\nE-mail: maria at example\nTelefone: (11) 98765-4321\n\n\
                       Gostaria de um orçamento para um site."
                    .into(),
                ..expected_email("(11) 98765-4321")
            },
            true,
        );

        let sut = ContactServiceImpl::new(mail_config, email);

        // Act
        let result = sut
            .relay(ContactRelayRequest {
                email: Some("maria at example".into()),
                ..request()
            })
            .await;

        // Assert
        result.unwrap();
    }

    #[test]
    fn body_lines_in_order() {
        let email = build_email(
            &config(587),
            ContactSubmission {
                name: "Maria".into(),
                email: "maria@example.com".into(),
                phone: None,
                message: "Linha 1\nLinha 2".into(),
            },
        )
        .unwrap();

        assert_eq!(
            email.body.lines().collect::<Vec<_>>(),
            [
                "Nome: Maria",
                "E-mail: maria@example.com",
                "Telefone: -",
                "",
                "Linha 1",
                "Linha 2",
            ]
        );
    }
}
