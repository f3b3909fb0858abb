//! Maps a domain [`Message`] onto a MIME message

use std::{fs, path::Path};

use lettre::message::{header::ContentType, Attachment, MultiPart, SinglePart};
use tracing::debug;

use crate::domain::communication::mailer::{Body, MailerError, Message, HTML_FALLBACK};

/// Builds the lettre message for `message`, reading attachment contents from disk.
///
/// Bcc recipients end up in the envelope only.
pub fn compose(message: &Message) -> Result<lettre::Message, MailerError> {
    let mut builder = lettre::Message::builder()
        .from(message.from.mailbox().clone())
        .subject(message.subject.as_str());

    for to in &message.to {
        builder = builder.to(to.mailbox().clone());
    }

    for cc in &message.cc {
        builder = builder.cc(cc.mailbox().clone());
    }

    for bcc in &message.bcc {
        builder = builder.bcc(bcc.mailbox().clone());
    }

    if message.attachments.is_empty() {
        let email = match &message.body {
            Body::Plain(bytes) => builder.singlepart(SinglePart::plain(bytes.clone()))?,
            Body::Html(bytes) => builder.multipart(alternative(bytes))?,
        };

        return Ok(email);
    }

    let mut mixed = match &message.body {
        Body::Plain(bytes) => MultiPart::mixed().singlepart(SinglePart::plain(bytes.clone())),
        Body::Html(bytes) => MultiPart::mixed().multipart(alternative(bytes)),
    };

    for path in &message.attachments {
        mixed = mixed.singlepart(attachment(path)?);
    }

    Ok(builder.multipart(mixed)?)
}

fn alternative(html: &[u8]) -> MultiPart {
    MultiPart::alternative()
        .singlepart(SinglePart::plain(HTML_FALLBACK.to_string()))
        .singlepart(SinglePart::html(html.to_vec()))
}

fn attachment(path: &Path) -> Result<SinglePart, MailerError> {
    let content = fs::read(path).map_err(|source| MailerError::Attachment {
        path: path.to_path_buf(),
        source,
    })?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let content_type = ContentType::parse(mime.as_ref()).map_err(|e| {
        MailerError::Compose(anyhow::anyhow!("invalid content type {}: {}", mime, e))
    })?;

    debug!("attaching {} as {} ({} bytes)", filename, mime, content.len());

    Ok(Attachment::new(filename).body(content, content_type))
}
