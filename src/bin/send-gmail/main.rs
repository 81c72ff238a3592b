#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Send a single email through Gmail

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use gmail_sender::{
    domain::mail::MessageBuilder,
    infrastructure::email::smtp::{SmtpConfig, SmtpMailer},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables.
///
/// Body parts are added grouped by kind: every `--text`, then every `--html`,
/// then every `--image`, then every `--attach`, each group in the order given.
#[derive(Debug, Parser)]
pub struct Args {
    /// The Gmail username
    #[clap(long, env = "SMTP_USER")]
    pub username: String,

    /// The Gmail password or app password
    #[clap(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// The sender's address
    #[clap(long, env = "MAIL_FROM")]
    pub from: String,

    /// The sender's display name
    #[clap(long, env = "MAIL_FROM_NAME")]
    pub from_name: Option<String>,

    /// Recipient addresses
    #[clap(long, required = true, value_delimiter = ',')]
    pub to: Vec<String>,

    /// The subject
    #[clap(long)]
    pub subject: Option<String>,

    /// Plain text parts
    #[clap(long)]
    pub text: Vec<String>,

    /// HTML parts
    #[clap(long)]
    pub html: Vec<String>,

    /// Images to embed inline
    #[clap(long)]
    pub image: Vec<PathBuf>,

    /// Files to attach
    #[clap(long = "attach")]
    pub attachments: Vec<PathBuf>,
}

#[mutants::skip]
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mailer = Arc::new(SmtpMailer::new(SmtpConfig::gmail()));
    let mut builder = MessageBuilder::new(mailer);

    match &args.from_name {
        Some(name) => builder.set_sender_with_name(&args.from, name)?,
        None => builder.set_sender(&args.from)?,
    };

    builder.set_recipients(&args.to)?;

    if let Some(subject) = &args.subject {
        builder.set_subject(subject.as_str());
    }

    for text in &args.text {
        builder.add_plain_text(text.as_str());
    }

    for html in &args.html {
        builder.add_html(html.as_str());
    }

    for image in &args.image {
        builder.add_inline_image(image)?;
    }

    for attachment in &args.attachments {
        builder.add_attachment(attachment)?;
    }

    builder.send(args.username, args.password)?;

    info!("email sent successfully");

    Ok(())
}
