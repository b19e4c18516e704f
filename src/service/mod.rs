//! Service Helpers
//!
//! Building blocks for services that cache entities read from a backing store.

mod read_through;

pub use read_through::{BackingStore, EntityCache};
