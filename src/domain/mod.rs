//! Domain layer - Core types and pure logic.
//!
//! Favorites, the static catalog and the session vote tally.
//! Nothing in here performs I/O; persistence goes through `crate::ports`.

pub mod catalog;
pub mod codec;
pub mod favorite;
pub mod votes;

// Re-export core types for convenience
pub use catalog::{Category, CatalogError, default_categories, find_category};
pub use codec::{CodecError, decode_collection, encode_collection};
pub use favorite::{FavoriteItem, FavoritesCollection, ItemId, is_favorite};
pub use votes::{BarChart, VoteError, VoteTally};
