//! Message draft

use lettre::{
    message::{header::ContentType, MultiPart},
    Message,
};

use crate::domain::mail::{errors::MailError, BodyPart, EmailAddress};

/// The not-yet-sent email being assembled
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageDraft {
    sender: Option<EmailAddress>,
    recipients: Vec<EmailAddress>,
    subject: Option<String>,
    parts: Vec<BodyPart>,
}

impl MessageDraft {
    /// The sender, if set
    pub fn sender(&self) -> Option<&EmailAddress> {
        self.sender.as_ref()
    }

    /// The recipients, in the order they were given
    pub fn recipients(&self) -> &[EmailAddress] {
        &self.recipients
    }

    /// The subject, if set
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The body parts, in insertion order
    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    pub(crate) fn set_sender(&mut self, sender: EmailAddress) {
        self.sender = Some(sender);
    }

    pub(crate) fn set_recipients(&mut self, recipients: Vec<EmailAddress>) {
        self.recipients = recipients;
    }

    pub(crate) fn set_subject(&mut self, subject: String) {
        self.subject = Some(subject);
    }

    pub(crate) fn push(&mut self, part: BodyPart) {
        self.parts.push(part);
    }

    /// Assemble the draft into a single `multipart/mixed` message.
    ///
    /// Every recipient goes into the `To` header. A draft without body parts
    /// produces an empty `text/plain` body.
    pub fn to_message(&self) -> Result<Message, MailError> {
        let sender = self
            .sender
            .as_ref()
            .ok_or(MailError::IncompleteDraft("no sender"))?;

        if self.recipients.is_empty() {
            return Err(MailError::IncompleteDraft("no recipients"));
        }

        let mut builder = Message::builder().from(sender.mailbox().clone());

        for recipient in &self.recipients {
            builder = builder.to(recipient.mailbox().clone());
        }

        if let Some(subject) = &self.subject {
            builder = builder.subject(subject.as_str());
        }

        let mut parts = self.parts.iter().map(BodyPart::to_single_part);

        let message = match parts.next() {
            None => builder.header(ContentType::TEXT_PLAIN).body(String::new())?,
            Some(first) => builder.multipart(
                parts.fold(MultiPart::mixed().singlepart(first), |multipart, part| {
                    multipart.singlepart(part)
                }),
            )?,
        };

        Ok(message)
    }
}
