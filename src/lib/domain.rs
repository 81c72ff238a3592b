//! Message model, builder and the mail transport capability

pub mod mail;
