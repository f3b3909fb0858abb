//! Config resolver

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::domain::communication::email_addresses::EmailAddress;

use super::{Config, ConfigError, Environment, Password, RawFlags, Server};

/// Validates [`RawFlags`] and fills in defaults to produce a [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigResolver<E>
where
    E: Environment,
{
    env: E,
}

impl<E> ConfigResolver<E>
where
    E: Environment,
{
    /// Creates a new config resolver.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Resolves the flags of one invocation.
    ///
    /// # Arguments
    /// * `flags` - The [`RawFlags`] handed over by the argument parser.
    ///
    /// # Returns
    /// - [`Ok`] with the validated [`Config`].
    /// - [`Err`] with the first [`ConfigError`] encountered. Nothing is sent
    ///   over the network before this returns.
    pub fn resolve(&self, flags: RawFlags) -> Result<Config, ConfigError> {
        let from = self.sender(flags.from.as_deref())?;

        if flags.to.is_empty() {
            return Err(ConfigError::NoRecipients);
        }

        let to = parse_addresses(&flags.to)?;
        let cc = parse_addresses(&flags.cc)?;
        let bcc = parse_addresses(&flags.bcc)?;

        let server: Server = flags.server.parse()?;

        let message = self.message_body(flags.message.as_deref())?;
        let attachments = probe_attachments(flags.attachments)?;

        let username = flags.username.filter(|username| !username.is_empty());
        let password = flags.password.as_deref().map(Password::new);

        Ok(Config {
            from,
            to,
            cc,
            bcc,
            subject: flags.subject.unwrap_or_default(),
            message,
            attachments,
            is_html: flags.html,
            username,
            password,
            server,
        })
    }

    fn sender(&self, from: Option<&str>) -> Result<EmailAddress, ConfigError> {
        if let Some(from) = from.filter(|from| !from.is_empty()) {
            return parse_address(from);
        }

        let username = self.env.username().map_err(ConfigError::UnknownUser)?;
        let hostname = self.env.hostname().map_err(ConfigError::UnknownHostname)?;
        let from = format!("{}@{}", username, hostname);

        debug!("no sender given, defaulting to {}", from);

        parse_address(&from)
    }

    fn message_body(&self, path: Option<&Path>) -> Result<Vec<u8>, ConfigError> {
        match path.filter(|path| *path != Path::new("-")) {
            Some(path) => fs::read(path).map_err(|source| ConfigError::ReadMessage {
                path: path.to_path_buf(),
                source,
            }),
            None => {
                debug!("reading message body from standard input");

                self.env.read_stdin().map_err(ConfigError::ReadStdin)
            }
        }
    }
}

fn parse_address(raw: &str) -> Result<EmailAddress, ConfigError> {
    EmailAddress::new(raw).map_err(|reason| ConfigError::InvalidAddress {
        address: raw.to_string(),
        reason,
    })
}

fn parse_addresses(raw: &[String]) -> Result<Vec<EmailAddress>, ConfigError> {
    raw.iter().map(|address| parse_address(address)).collect()
}

fn probe_attachments(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>, ConfigError> {
    for path in &paths {
        File::open(path).map_err(|source| ConfigError::OpenAttachment {
            path: path.clone(),
            source,
        })?;
    }

    Ok(paths)
}
