//! Outbound SMS notifications.
//!
//! The gateway is treated as an opaque boolean-returning sender: a send
//! either got an HTTP 200 back or it did not. There is no retry.

pub mod config;
pub mod sms;

pub use config::SmsConfig;
pub use sms::{DisabledSms, SmsClient, SmsError, SmsSender};
