//! Typed Rust client for the SendCloud SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types (phone numbers, templates,
//! parameter sets), a transport layer for wire-format details, a signing module, and a
//! small client layer orchestrating sends.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use sendcloud_sms::{
//!     Country, Credentials, SendCloudClient, SendSms, Template, TemplateId, TemplateKind,
//!     TemplateRegistry,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendcloud_sms::SendCloudError> {
//!     let cn = Country::parse("CN")?;
//!     let registry = TemplateRegistry::build([Template::new(
//!         TemplateId::new("1024")?,
//!         TemplateKind::Generic,
//!         cn,
//!     )])?;
//!     let credentials = Credentials::new("user", "key")?;
//!     let client = SendCloudClient::new(credentials, cn, Arc::new(registry));
//!     let request = SendSms::new(TemplateKind::Generic, vec!["13800138000".to_owned()])
//!         .var("name", "Ann");
//!     let result = client.send(request).await?;
//!     println!("{result:?}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod sign;
mod transport;

pub use client::{
    Credentials, PreparedSend, SendCloudClient, SendCloudClientBuilder, SendCloudError,
};
pub use config::{ClientConfig, TemplateConfig};
pub use domain::{
    ActionResult, ClassifyUsing, Country, MsgType, ParameterSet, Phone, SendCode, SendSms,
    SignedRequest, SmsKey, SmsUser, Template, TemplateId, TemplateKind, TemplateRegistry,
    ValidationError, VerificationCode,
};
pub use sign::{DoubleSha256, SignatureScheme};
