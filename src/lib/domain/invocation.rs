//! Turns raw command-line flags into a validated [`Config`].

mod config;
mod environment;
mod errors;
mod password;
mod resolver;
mod server;

pub use config::{Config, RawFlags};
pub use environment::Environment;
pub use errors::ConfigError;
pub use password::Password;
pub use resolver::ConfigResolver;
pub use server::Server;
