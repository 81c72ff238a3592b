//! Fluent message builder

use std::{fmt, path::Path, sync::Arc};

use tracing::{debug, info, warn};

use crate::domain::mail::{
    errors::MailError, BodyPart, ContentId, Credentials, EmailAddress, Mailer, MessageDraft,
};

/// Builds a [`MessageDraft`] through chained calls and sends it.
///
/// Every fallible call validates its input (or reads its file) before touching
/// the draft, so an error leaves the draft exactly as it was.
///
/// A builder is meant to be sent once. [`send`](Self::send) borrows the builder
/// so that a failed delivery can be retried, but a second call after a
/// successful one sends the message again.
pub struct MessageBuilder<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    draft: MessageDraft,
}

impl<M> MessageBuilder<M>
where
    M: Mailer,
{
    /// Create an empty builder that will deliver through `mailer`
    pub fn new(mailer: Arc<M>) -> Self {
        Self {
            mailer,
            draft: MessageDraft::default(),
        }
    }

    /// The draft as assembled so far
    pub fn draft(&self) -> &MessageDraft {
        &self.draft
    }

    /// Set the sender, replacing any previous one
    pub fn set_sender(&mut self, address: &str) -> Result<&mut Self, MailError> {
        let sender = EmailAddress::new(address).map_err(|source| MailError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;

        debug!(sender = %sender, "set sender");
        self.draft.set_sender(sender);

        Ok(self)
    }

    /// Set the sender with a display name, replacing any previous one
    pub fn set_sender_with_name(
        &mut self,
        address: &str,
        display_name: &str,
    ) -> Result<&mut Self, MailError> {
        let sender = EmailAddress::with_name(address, display_name).map_err(|source| {
            MailError::InvalidAddress {
                address: address.to_string(),
                source,
            }
        })?;

        debug!(sender = %sender, "set sender");
        self.draft.set_sender(sender);

        Ok(self)
    }

    /// Set the recipients, replacing any previous list.
    ///
    /// Each address is trimmed and lower-cased. The first invalid entry fails
    /// the whole call.
    pub fn set_recipients<I, S>(&mut self, addresses: I) -> Result<&mut Self, MailError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let recipients = addresses
            .into_iter()
            .map(|address| {
                let address = address.as_ref();

                EmailAddress::recipient(address).map_err(|source| MailError::InvalidAddress {
                    address: address.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = recipients.len(), "set recipients");
        self.draft.set_recipients(recipients);

        Ok(self)
    }

    /// Set the subject verbatim
    pub fn set_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.draft.set_subject(subject.into());
        self
    }

    /// Append a plain text part
    pub fn add_plain_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.draft.push(BodyPart::PlainText(text.into()));
        self
    }

    /// Append an HTML part
    pub fn add_html(&mut self, markup: impl Into<String>) -> &mut Self {
        self.draft.push(BodyPart::Html(markup.into()));
        self
    }

    /// Append an image shown inline: an HTML `<img>` part referencing a fresh
    /// content ID, followed by the image itself.
    pub fn add_inline_image(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, MailError> {
        let path = path.as_ref();
        let content_id = ContentId::generate();
        let image = BodyPart::inline_image(path, content_id.clone())?;

        debug!(path = %path.display(), content_id = %content_id, "add inline image");
        self.draft.push(BodyPart::Html(content_id.img_tag()));
        self.draft.push(image);

        Ok(self)
    }

    /// Append a file attachment
    pub fn add_attachment(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, MailError> {
        let path = path.as_ref();
        let attachment = BodyPart::attachment(path)?;

        debug!(path = %path.display(), "add attachment");
        self.draft.push(attachment);

        Ok(self)
    }

    /// Assemble the draft and make exactly one delivery attempt.
    ///
    /// # Arguments
    /// * `username` - The SMTP username.
    /// * `secret` - The SMTP password or app password.
    ///
    /// # Returns
    /// - [`Ok`] once the transport has accepted the message.
    /// - [`MailError::IncompleteDraft`] if the sender or recipients are missing.
    /// - [`MailError::DeliveryFailed`] wrapping the transport's error otherwise.
    pub fn send(
        &self,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<(), MailError> {
        let message = self.draft.to_message()?;
        let credentials = Credentials::new(username, secret);

        debug!(
            username = credentials.username(),
            parts = self.draft.parts().len(),
            "sending message"
        );

        if let Err(err) = self.mailer.send_message(credentials, &message) {
            warn!(error = %err, "delivery failed");

            return Err(MailError::DeliveryFailed(err));
        }

        info!(recipients = self.draft.recipients().len(), "message delivered");

        Ok(())
    }
}

impl<M> fmt::Debug for MessageBuilder<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuilder")
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}
