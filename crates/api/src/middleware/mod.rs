//! Authentication extractors.
//!
//! - [`api_key::RequireApiKey`] -- Requires the static `X-API-KEY` secret.

pub mod api_key;
