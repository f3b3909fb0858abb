//! Message dispatcher

use tracing::info;

use crate::domain::{
    communication::mailer::{Body, Mailer, MailerError, Message},
    invocation::Config,
};

/// Builds the [`Message`] described by a [`Config`] and hands it to a [`Mailer`]
#[derive(Debug, Clone)]
pub struct Dispatcher<M>
where
    M: Mailer,
{
    mailer: M,
}

impl<M> Dispatcher<M>
where
    M: Mailer,
{
    /// Creates a new dispatcher.
    pub fn new(mailer: M) -> Self {
        Self { mailer }
    }

    /// Sends the message described by `config`, exactly once.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the mailer accepted the message,
    /// or an [`Err`] containing the [`MailerError`] it reported.
    pub fn dispatch(&self, config: &Config) -> Result<(), MailerError> {
        let message = message(config);

        info!(
            to = message.to.len(),
            cc = message.cc.len(),
            bcc = message.bcc.len(),
            attachments = message.attachments.len(),
            html = message.body.is_html(),
            "dispatching message"
        );

        self.mailer.send_email(&message)
    }
}

/// Maps a config onto the message it describes
pub fn message(config: &Config) -> Message {
    let body = if config.is_html {
        Body::Html(config.message.clone())
    } else {
        Body::Plain(config.message.clone())
    };

    Message {
        from: config.from.clone(),
        to: config.to.clone(),
        cc: config.cc.clone(),
        bcc: config.bcc.clone(),
        subject: config.subject.clone(),
        body,
        attachments: config.attachments.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use testresult::TestResult;

    use crate::domain::{
        communication::{email_addresses::EmailAddress, mailer::tests::MockMailer},
        invocation::Server,
    };

    use super::*;

    fn config(body: &[u8], is_html: bool) -> TestResult<Config> {
        Ok(Config {
            from: EmailAddress::new("sender@example.com")?,
            to: vec![EmailAddress::new("alice@example.com")?],
            cc: vec![],
            bcc: vec![],
            subject: "Hi".to_string(),
            message: body.to_vec(),
            attachments: vec![],
            is_html,
            username: None,
            password: None,
            server: Server {
                host: "localhost".to_string(),
                port: 25,
            },
        })
    }

    #[test]
    fn test_plain_body_is_passed_through_unchanged() -> TestResult {
        let body = b"hello\r\n\xff binary too".to_vec();
        let expected = body.clone();

        let mut mailer = MockMailer::new();
        mailer
            .expect_send_email()
            .times(1)
            .withf(move |message| message.body == Body::Plain(expected.clone()))
            .returning(|_| Ok(()));

        Dispatcher::new(mailer).dispatch(&config(&body, false)?)?;

        Ok(())
    }

    #[test]
    fn test_html_body() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send_email()
            .times(1)
            .withf(|message| message.body == Body::Html(b"<p>hi</p>".to_vec()))
            .returning(|_| Ok(()));

        Dispatcher::new(mailer).dispatch(&config(b"<p>hi</p>", true)?)?;

        Ok(())
    }

    #[test]
    fn test_headers_and_attachments() -> TestResult {
        let mut config = config(b"hello", false)?;
        config.cc = vec![EmailAddress::new("carol@example.com")?];
        config.bcc = vec![EmailAddress::new("dave@example.com")?];
        config.attachments = vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")];

        let message = message(&config);

        assert_eq!(message.from.as_str(), "sender@example.com");
        assert_eq!(message.to, config.to);
        assert_eq!(message.cc, config.cc);
        assert_eq!(message.bcc, config.bcc);
        assert_eq!(message.subject, "Hi");
        assert_eq!(
            message.attachments,
            vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]
        );
        assert_eq!(message.recipient_count(), 3);

        Ok(())
    }

    #[test]
    fn test_mailer_failure_is_returned() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().times(1).returning(|_| {
            Err(MailerError::SendError {
                server: "localhost:25".to_string(),
                source: anyhow::anyhow!("connection refused"),
            })
        });

        let result = Dispatcher::new(mailer).dispatch(&config(b"hello", false)?);

        assert!(matches!(result, Err(MailerError::SendError { .. })));

        Ok(())
    }
}
