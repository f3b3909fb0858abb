//! SMTP email service implementation

use std::time::Duration;

use lettre::{
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
        SUBMISSIONS_PORT,
    },
    SmtpTransport, Transport,
};
use tracing::{debug, info};

use crate::domain::{
    communication::mailer::{Mailer, MailerError, Message},
    invocation::{Config, Password},
};

use super::compose::compose;

/// How long to wait for the server before giving up
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// SMTP configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmtpConfig {
    /// The SMTP host
    pub host: String,

    /// The SMTP port
    pub port: u16,

    /// The SMTP username; no authentication is attempted without one
    pub username: Option<String>,

    /// The SMTP password
    pub password: Option<Password>,
}

impl SmtpConfig {
    /// The server as `host:port`
    pub fn server(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&Config> for SmtpConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

/// SMTP mailer
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build the blocking SMTP transport for the configured server.
    ///
    /// Port 465 speaks TLS from the start; any other port upgrades with
    /// STARTTLS when the server offers it and stays in plain text otherwise.
    pub fn transport(&self) -> Result<SmtpTransport, MailerError> {
        let parameters = TlsParameters::new(self.config.host.clone())
            .map_err(|e| self.send_error(e))?;

        let tls = if self.config.port == SUBMISSIONS_PORT {
            Tls::Wrapper(parameters)
        } else {
            Tls::Opportunistic(parameters)
        };

        let mut builder = SmtpTransport::builder_dangerous(&self.config.host)
            .port(self.config.port)
            .tls(tls)
            .timeout(Some(CONNECT_TIMEOUT));

        if let Some(username) = &self.config.username {
            debug!("authenticating as {}", username);

            let password = self
                .config
                .password
                .as_ref()
                .map(|password| password.expose().to_string())
                .unwrap_or_default();

            builder = builder.credentials(Credentials::new(username.clone(), password));
        }

        Ok(builder.build())
    }

    fn send_error<E>(&self, err: E) -> MailerError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        MailerError::SendError {
            server: self.config.server(),
            source: err.into(),
        }
    }
}

impl Mailer for SmtpMailer {
    fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let email = compose(message)?;
        let transport = self.transport()?;

        info!("sending message via {}", self.config.server());

        deliver(&transport, &email).map_err(|e| MailerError::SendError {
            server: self.config.server(),
            source: e,
        })?;

        info!("message sent to {} recipient(s)", message.recipient_count());

        Ok(())
    }
}

/// Hands a composed message to a lettre transport
pub fn deliver<T>(transport: &T, email: &lettre::Message) -> anyhow::Result<()>
where
    T: Transport,
    T::Error: std::error::Error + Send + Sync + 'static,
{
    transport.send(email)?;

    Ok(())
}
