//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod favorite_game_repo;

pub use favorite_game_repo::FavoriteGameRepo;
