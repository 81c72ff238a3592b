//! SMTP credentials

use std::fmt;

/// A secret (password or app password) that never prints itself
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a raw secret
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Expose the secret to the transport
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

/// Username and secret for a single authenticated session.
///
/// Built at send time and handed to the [`Mailer`](super::Mailer) by value, so
/// it is dropped as soon as the session ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    secret: Secret,
}

impl Credentials {
    /// Create new credentials
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: Secret::new(secret),
        }
    }

    /// The username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The secret
    pub fn secret(&self) -> &Secret {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_display_obfuscates() {
        let secret = Secret::new("hunter22");
        assert_eq!(format!("{}", secret), "********");
    }

    #[test]
    fn test_credentials_debug_obfuscates_secret() {
        let credentials = Credentials::new("jeff@gmail.com", "hunter22");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("jeff@gmail.com"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn test_secret_can_be_exposed() {
        let credentials = Credentials::new("jeff@gmail.com", "hunter22");

        assert_eq!(credentials.username(), "jeff@gmail.com");
        assert_eq!(credentials.secret().expose(), "hunter22");
    }
}
