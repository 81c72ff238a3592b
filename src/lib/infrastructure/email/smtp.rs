//! SMTP mailer implementation

use anyhow::Result;
use lettre::{
    transport::smtp::{
        authentication,
        client::{Tls, TlsParameters, TlsVersion},
    },
    Message, SmtpTransport, Transport,
};
use tracing::debug;

use crate::domain::mail::{Credentials, Mailer};

/// Gmail's SMTP submission endpoint
pub const GMAIL_HOST: &str = "smtp.gmail.com";

/// The SMTP submission port
pub const SUBMISSION_PORT: u16 = 587;

/// SMTP configuration.
///
/// Built once at startup and handed to [`SmtpMailer::new`].
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    /// The SMTP host
    pub host: String,

    /// The SMTP port
    pub port: u16,

    /// Refuse to continue unless the server upgrades the connection with STARTTLS
    pub require_starttls: bool,

    /// The lowest TLS version accepted during the upgrade
    pub min_tls_version: TlsVersion,
}

impl SmtpConfig {
    /// Gmail over STARTTLS on port 587, TLS 1.2 or newer
    pub fn gmail() -> Self {
        Self {
            host: GMAIL_HOST.to_string(),
            port: SUBMISSION_PORT,
            require_starttls: true,
            min_tls_version: TlsVersion::Tlsv12,
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self::gmail()
    }
}

/// SMTP mailer
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// The configuration sessions are opened with
    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    /// Build a blocking transport authenticated with `credentials`
    pub fn transport(&self, credentials: &Credentials) -> Result<SmtpTransport> {
        let creds = authentication::Credentials::new(
            credentials.username().to_string(),
            credentials.secret().expose().to_string(),
        );

        Ok(SmtpTransport::starttls_relay(&self.config.host)?
            .credentials(creds)
            .port(self.config.port)
            .tls(self.tls()?)
            .build())
    }

    /// The STARTTLS policy for new sessions
    pub fn tls(&self) -> Result<Tls> {
        let parameters = TlsParameters::builder(self.config.host.clone())
            .set_min_tls_version(self.config.min_tls_version)
            .build()?;

        if self.config.require_starttls {
            Ok(Tls::Required(parameters))
        } else {
            Ok(Tls::Opportunistic(parameters))
        }
    }
}

impl Mailer for SmtpMailer {
    #[mutants::skip]
    fn send_message(&self, credentials: Credentials, message: &Message) -> Result<()> {
        debug!(
            host = %self.config.host,
            port = self.config.port,
            "opening SMTP session"
        );

        let response = self.transport(&credentials)?.send(message)?;

        debug!(code = %response.code(), "message accepted");

        Ok(())
    }
}
