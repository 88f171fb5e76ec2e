//! Domain building blocks shared by every makeup-calendar crate.
//!
//! This crate has no I/O: errors, shared type aliases, the static category
//! catalogue, booking rules (due-date parsing, transaction tokens), and
//! API-key verification.

pub mod api_key;
pub mod booking;
pub mod category;
pub mod error;
pub mod types;
