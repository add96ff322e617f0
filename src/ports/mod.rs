//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the domain/usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `LocalStore`: Durable key-value persistence for serialized state

pub mod local_store;

pub use local_store::{LocalStore, StoreError};
