#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Fluent builder for composing an email and sending it through Gmail's SMTP
//! submission endpoint over STARTTLS.

pub mod domain;
pub mod infrastructure;
