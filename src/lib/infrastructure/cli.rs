//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use crate::domain::invocation::RawFlags;

/// A command-line tool for sending emails via SMTP.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "sendem",
    version,
    after_help = "Homepage: https://github.com/alasdairmorris/sendem"
)]
pub struct Args {
    /// From this address [default: <user>@<hostname>]
    #[arg(short = 'f', long, value_name = "ADDR")]
    pub from: Option<String>,

    /// CC this address (for multiple, use "-c a1 -c a2 ...")
    #[arg(short = 'c', long, value_name = "ADDR")]
    pub cc: Vec<String>,

    /// BCC this address (for multiple, use "-b a1 -b a2 ...")
    #[arg(short = 'b', long, value_name = "ADDR")]
    pub bcc: Vec<String>,

    /// Subject
    #[arg(short = 's', long)]
    pub subject: Option<String>,

    /// File to use for message body [default: stdin]
    #[arg(short = 'm', long, value_name = "FILE")]
    pub message: Option<PathBuf>,

    /// File to attach (for multiple, use "-a f1 -a f2 ...")
    #[arg(short = 'a', long = "attach", value_name = "FILE")]
    pub attachments: Vec<PathBuf>,

    /// Treat message body as HTML
    #[arg(short = 'H', long)]
    pub html: bool,

    /// Username for SMTP connection
    #[arg(short = 'u', long = "user", value_name = "USERNAME")]
    pub username: Option<String>,

    /// Password for SMTP connection
    #[arg(short = 'p', long = "pass", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Server to use for SMTP
    #[arg(short = 'x', long, value_name = "HOST:PORT", default_value = "localhost:25")]
    pub server: String,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Recipient addresses
    #[arg(value_name = "RECIPIENT", required = true)]
    pub recipients: Vec<String>,
}

impl Args {
    /// The most verbose log level to emit
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

impl From<Args> for RawFlags {
    fn from(args: Args) -> Self {
        RawFlags {
            from: args.from,
            to: args.recipients,
            cc: args.cc,
            bcc: args.bcc,
            subject: args.subject,
            message: args.message,
            attachments: args.attachments,
            html: args.html,
            username: args.username,
            password: args.password,
            server: args.server,
        }
    }
}
