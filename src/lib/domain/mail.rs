//! Mail composition module.

mod body_part;
mod builder;
mod credentials;
mod draft;
mod email_address;
mod mailer;

pub mod errors;

pub use body_part::{BodyPart, ContentId};
pub use builder::MessageBuilder;
pub use credentials::{Credentials, Secret};
pub use draft::MessageDraft;
pub use email_address::{EmailAddress, EmailAddressError};
pub use mailer::Mailer;
