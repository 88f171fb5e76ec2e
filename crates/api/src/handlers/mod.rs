//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the [`BookingStore`](makeup_db::BookingStore) and
//! [`SmsSender`](makeup_notify::SmsSender) held in
//! [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod appointment;
pub mod artist;
pub mod category;
pub mod confirmation;
