//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `FavoritesRepository`: Write-through favorites persistence
//! - `FavoriteToggle`: Pessimistic per-item favorite toggle

pub mod favorite_toggle;
pub mod favorites_repository;

pub use favorite_toggle::{FavoriteToggle, ToggleAction, ToggleState};
pub use favorites_repository::{FavoritesError, FavoritesRepository};
