use anyhow::Context;
use landing_config::{Config, MailRelayConfig};

/// Fails if the mail relay settings are incomplete. With `verbose` both
/// configs are printed, the SMTP password is redacted.
pub fn check_config(config: Config, verbose: bool) -> anyhow::Result<()> {
    let mail = MailRelayConfig::from_env().context("Invalid mail relay configuration")?;

    if verbose {
        println!("{config:#?}");
        println!("{mail:#?}");
    }

    Ok(())
}
