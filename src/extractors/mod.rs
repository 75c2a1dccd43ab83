//! Request extractors.

pub mod item_id;
pub use item_id::ItemId;
