//! Mail transport capability

use lettre::Message;

#[cfg(test)]
use mockall::mock;

use crate::domain::mail::Credentials;

/// Mail transport
pub trait Mailer: Send + Sync + 'static {
    /// Open an authenticated session and submit a single message.
    ///
    /// # Arguments
    /// * `credentials` - The [`Credentials`] for this session only.
    /// * `message` - The fully assembled message.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the server has accepted the message.
    /// Blocks for the duration of the exchange and never retries.
    fn send_message(&self, credentials: Credentials, message: &Message) -> anyhow::Result<()>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Mailer for Mailer {
        fn send_message(&self, credentials: Credentials, message: &Message) -> anyhow::Result<()>;
    }
}
