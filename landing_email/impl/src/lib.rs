use landing_email_contracts::{Email, EmailService, SmtpSettings, TlsMode};
use landing_utils::Apply;
use lettre::{
    message::{header, Mailbox, MessageBuilder},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

/// Sends each email through its own, freshly built SMTP transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailServiceImpl;

impl EmailService for EmailServiceImpl {
    async fn send(&self, smtp: SmtpSettings, email: Email) -> anyhow::Result<bool> {
        let message = build_message(email)?;
        let transport = build_transport(&smtp)?;

        debug!(host = %smtp.host, port = smtp.port, tls = ?smtp.tls, "sending email");

        transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }
}

fn build_transport(smtp: &SmtpSettings) -> anyhow::Result<AsyncSmtpTransport<Tokio1Executor>> {
    let parameters = TlsParameters::new(smtp.host.clone())?;
    let tls = match smtp.tls {
        TlsMode::Implicit => Tls::Wrapper(parameters),
        TlsMode::Opportunistic => Tls::Opportunistic(parameters),
    };

    Ok(
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
            .port(smtp.port)
            .tls(tls)
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build(),
    )
}

fn build_message(email: Email) -> anyhow::Result<Message> {
    Message::builder()
        .from(email.from.0)
        .to(email.recipient.0)
        .apply_map(email.reply_to, |builder, reply_to| {
            MessageBuilder::reply_to(builder, Mailbox::new(None, reply_to.0))
        })
        .subject(email.subject)
        .header(header::ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(Into::into)
}
