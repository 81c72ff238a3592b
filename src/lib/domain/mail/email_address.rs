//! Email Address

use std::fmt;

use lettre::{address::AddressError, message::Mailbox, Address};
use thiserror::Error;

use EmailAddressError::*;

/// An error that can occur when creating an email address
#[derive(Debug, Error)]
pub enum EmailAddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address is invalid
    #[error("email is invalid")]
    InvalidEmailAddress(#[from] AddressError),
}

/// An email address with an optional display name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(Mailbox);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// Accepts either a bare address (`user@example.com`) or a mailbox with a
    /// display name (`User <user@example.com>`).
    pub fn new(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = non_empty(raw)?;

        Ok(Self(trimmed.parse::<Mailbox>()?))
    }

    /// Create a new email address with a display name
    pub fn with_name(raw: &str, name: &str) -> Result<Self, EmailAddressError> {
        let address = non_empty(raw)?.parse::<Address>()?;

        Ok(Self(Mailbox::new(Some(name.to_string()), address)))
    }

    /// Create a new recipient address, lower-cased before parsing
    pub fn recipient(raw: &str) -> Result<Self, EmailAddressError> {
        Self::new(&raw.trim().to_lowercase())
    }

    /// The bare address, without any display name
    pub fn address(&self) -> &Address {
        &self.0.email
    }

    /// The display name, if any
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The address as a [`Mailbox`] header value
    pub fn mailbox(&self) -> &Mailbox {
        &self.0
    }
}

fn non_empty(raw: &str) -> Result<&str, EmailAddressError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(EmptyEmailAddress);
    }

    Ok(trimmed)
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for Mailbox {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_email_address_display() -> TestResult {
        let email = EmailAddress::new("email@example.com")?;

        assert_eq!(format!("{}", email), "email@example.com".to_string());

        Ok(())
    }

    #[test]
    fn test_email_address_is_trimmed() -> TestResult {
        let email = EmailAddress::new("  email@example.com\t")?;

        assert_eq!(email.address().to_string(), "email@example.com");

        Ok(())
    }

    #[test]
    fn test_empty_email_address_is_invalid() {
        let result = EmailAddress::new("   ");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), EmptyEmailAddress));
    }

    #[test]
    fn test_email_address_without_at_symbol_is_invalid() {
        let result = EmailAddress::new("email");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), InvalidEmailAddress(_)));
    }

    #[test]
    fn test_email_address_with_two_at_symbols_is_invalid() {
        let result = EmailAddress::new("email@@example.com");
        assert!(matches!(result, Err(InvalidEmailAddress(_))));
    }

    #[test]
    fn test_mailbox_syntax_keeps_display_name() -> TestResult {
        let email = EmailAddress::new("Jeff <jeff@example.com>")?;

        assert_eq!(email.name(), Some("Jeff"));
        assert_eq!(email.address().to_string(), "jeff@example.com");

        Ok(())
    }

    #[test]
    fn test_with_name_attaches_display_name() -> TestResult {
        let email = EmailAddress::with_name("jeff@example.com", "Jeff Example")?;

        assert_eq!(email.name(), Some("Jeff Example"));
        assert_eq!(email.address().to_string(), "jeff@example.com");

        Ok(())
    }

    #[test]
    fn test_with_name_rejects_invalid_address() {
        let result = EmailAddress::with_name("not an address", "Jeff");
        assert!(matches!(result, Err(InvalidEmailAddress(_))));
    }

    #[test]
    fn test_recipient_is_trimmed_and_lower_cased() -> TestResult {
        let email = EmailAddress::recipient("  B@Y.com ")?;

        assert_eq!(email.to_string(), "b@y.com");
        assert_eq!(email.name(), None);

        Ok(())
    }
}
