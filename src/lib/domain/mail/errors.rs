//! Error types for the mail module

use std::path::PathBuf;

use thiserror::Error;

use super::EmailAddressError;

/// Mail errors
#[derive(Debug, Error)]
pub enum MailError {
    /// An address could not be parsed
    #[error("invalid address \"{address}\"")]
    InvalidAddress {
        /// The address as supplied
        address: String,

        /// Why it was rejected
        #[source]
        source: EmailAddressError,
    },

    /// An image or attachment could not be read
    #[error("could not read {}", .path.display())]
    ResourceUnavailable {
        /// The path as supplied
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The draft is missing a sender or recipients
    #[error("draft is incomplete: {0}")]
    IncompleteDraft(&'static str),

    /// The transport rejected or failed to deliver the message
    #[error("delivery failed")]
    DeliveryFailed(#[source] anyhow::Error),

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for MailError {
    fn from(err: anyhow::Error) -> Self {
        MailError::UnknownError(err)
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::UnknownError(err.into())
    }
}
