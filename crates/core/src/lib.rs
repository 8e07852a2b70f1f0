//! Domain logic for the favorite games catalog.
//!
//! Pure functions and types only: no database, no HTTP. The storage and
//! transport crates build on top of what is defined here.

pub mod error;
pub mod favorite_game;
pub mod ordering;
pub mod statistics;
pub mod types;
