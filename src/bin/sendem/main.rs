#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Command-line tool for sending emails via SMTP

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sendem::{
    domain::{communication::dispatcher::Dispatcher, invocation::ConfigResolver},
    infrastructure::{
        cli::Args,
        email::smtp::{SmtpConfig, SmtpMailer},
        system::SystemEnvironment,
    },
};
use tracing::debug;

#[mutants::skip]
fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);

            ExitCode::FAILURE
        }
    }
}

#[mutants::skip]
fn run(args: Args) -> Result<()> {
    let config = ConfigResolver::new(SystemEnvironment).resolve(args.into())?;

    debug!("resolved {:?}", config.server);

    let mailer = SmtpMailer::new(SmtpConfig::from(&config));

    Dispatcher::new(mailer).dispatch(&config)?;

    Ok(())
}
