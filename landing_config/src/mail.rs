//! SMTP relay settings, read from the process environment.

use std::fmt;

use thiserror::Error;

pub const SMTP_HOST: &str = "SMTP_HOST";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const SMTP_USER: &str = "SMTP_USER";
pub const SMTP_PASS: &str = "SMTP_PASS";
pub const SMTP_FROM: &str = "SMTP_FROM";
pub const SMTP_TO: &str = "SMTP_TO";

const VARS: [&str; 6] = [SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS, SMTP_FROM, SMTP_TO];

/// Loads the mail relay configuration.
///
/// Called once per relayed message, so changes to the underlying source take
/// effect without a restart.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MailConfigSource: Send + Sync + 'static {
    fn load(&self) -> Result<MailRelayConfig, MailConfigError>;
}

/// Reads the `SMTP_*` variables from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvMailConfigSource;

impl MailConfigSource for EnvMailConfigSource {
    fn load(&self) -> Result<MailRelayConfig, MailConfigError> {
        MailRelayConfig::from_env()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct MailRelayConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Sender of relayed messages, may include a display name.
    pub from: String,
    /// Inbox that receives relayed messages.
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailConfigError {
    #[error("Missing mail configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("Invalid SMTP_PORT: {0:?}")]
    InvalidPort(String),
}

impl MailRelayConfig {
    pub fn from_env() -> Result<Self, MailConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`. Empty values count as missing and all
    /// six settings are required.
    pub fn from_lookup(
        mut lookup: impl FnMut(&str) -> Option<String>,
    ) -> Result<Self, MailConfigError> {
        let values = VARS.map(|key| lookup(key).filter(|value| !value.is_empty()));
        let missing = VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(&key, _)| key)
            .collect::<Vec<_>>();

        let [host, port, user, password, from, to] = values;
        let (Some(host), Some(port), Some(user), Some(password), Some(from), Some(to)) =
            (host, port, user, password, from, to)
        else {
            return Err(MailConfigError::Missing(missing));
        };

        let port = port
            .trim()
            .parse()
            .map_err(|_| MailConfigError::InvalidPort(port))?;

        Ok(Self {
            host,
            port,
            user,
            password,
            from,
            to,
        })
    }
}

impl fmt::Debug for MailRelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailRelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

#[cfg(feature = "mock")]
impl MockMailConfigSource {
    pub fn with_load(mut self, result: Result<MailRelayConfig, MailConfigError>) -> Self {
        self.expect_load().once().return_once(move || result);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use landing_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn env() -> HashMap<&'static str, String> {
        HashMap::from([
            (SMTP_HOST, "smtp.example.com".into()),
            (SMTP_PORT, "587".into()),
            (SMTP_USER, "site".into()),
            (SMTP_PASS, "hunter2".into()),
            (SMTP_FROM, "Site <no-reply@example.com>".into()),
            (SMTP_TO, "contato@example.com".into()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<MailRelayConfig, MailConfigError> {
        MailRelayConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn complete() {
        let config = load(&env()).unwrap();

        assert_eq!(
            config,
            MailRelayConfig {
                host: "smtp.example.com".into(),
                port: 587,
                user: "site".into(),
                password: "hunter2".into(),
                from: "Site <no-reply@example.com>".into(),
                to: "contato@example.com".into(),
            }
        );
    }

    #[test]
    fn missing_password() {
        let mut env = env();
        env.remove(SMTP_PASS);

        assert_eq!(load(&env), Err(MailConfigError::Missing(vec![SMTP_PASS])));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let mut env = env();
        env.insert(SMTP_HOST, String::new());
        env.insert(SMTP_TO, String::new());

        assert_eq!(
            load(&env),
            Err(MailConfigError::Missing(vec![SMTP_HOST, SMTP_TO]))
        );
    }

    #[test]
    fn nothing_configured() {
        assert_matches!(
            MailRelayConfig::from_lookup(|_| None),
            Err(MailConfigError::Missing(missing)) if missing.len() == 6
        );
    }

    #[test]
    fn invalid_port() {
        let mut env = env();
        env.insert(SMTP_PORT, "smtp".into());

        assert_eq!(load(&env), Err(MailConfigError::InvalidPort("smtp".into())));
    }

    #[test]
    fn debug_redacts_password() {
        let config = load(&env()).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
