use anyhow::{ensure, Context};
use clap::Subcommand;
use landing_config::MailRelayConfig;
use landing_email_contracts::{Email, EmailService, SmtpSettings};
use landing_email_impl::EmailServiceImpl;
use landing_models::email_address::EmailAddressWithName;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability using the SMTP_* environment variables
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(recipient).await,
        }
    }
}

async fn test(recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let config = MailRelayConfig::from_env()?;
    let from = config
        .from
        .parse::<EmailAddressWithName>()
        .with_context(|| format!("Invalid sender address {:?}", config.from))?;
    let smtp = SmtpSettings::new(config.host, config.port, config.user, config.password);

    let ok = EmailServiceImpl
        .send(
            smtp,
            Email {
                from,
                recipient,
                reply_to: None,
                subject: "Email Deliverability Test".into(),
                body: "Email deliverability seems to be working!".into(),
            },
        )
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
