//! Domain building blocks shared by the store and HTTP layers.

pub mod dates;
pub mod error;
pub mod slug;
pub mod types;
