//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the DTOs used to create rows.

pub mod appointment;
pub mod artist;
