//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The external-facing DTO accepted and returned by the API
//! - Insert / change-set structs handed to storage

pub mod favorite_game;
