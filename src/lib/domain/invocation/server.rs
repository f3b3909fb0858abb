//! SMTP server address

use std::{fmt, str::FromStr};

use super::ConfigError;

/// Host used when `HOST:PORT` leaves the host out, as in `:25`
pub const DEFAULT_HOST: &str = "localhost";

/// An SMTP server, parsed from `HOST:PORT`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Server {
    /// Server hostname
    pub host: String,

    /// Server port
    pub port: u16,
}

impl FromStr for Server {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let bits: Vec<&str> = raw.split(':').collect();

        let [host, port] = bits.as_slice() else {
            return Err(ConfigError::InvalidServer(raw.to_string()));
        };

        let port = port.parse().map_err(|reason| ConfigError::InvalidPort {
            server: raw.to_string(),
            reason,
        })?;

        let host = if host.is_empty() { DEFAULT_HOST } else { *host };

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
