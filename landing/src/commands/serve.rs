use landing_config::{Config, MailRelayConfig};
use tracing::{info, warn};

use crate::environment::{self, types::RestServer};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    // Mail settings are read again on every relay.
    match MailRelayConfig::from_env() {
        Ok(mail) => info!("Relaying contact submissions via {}:{}", mail.host, mail.port),
        Err(err) => warn!("{err}"),
    }

    let server: RestServer = environment::rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
