//! Common types and traits for all entities

pub mod entity;

// Re-exports
pub use entity::{EntityId, InventoryEntity};
