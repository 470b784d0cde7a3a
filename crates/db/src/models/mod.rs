//! Row types and input DTOs for the two portfolio collections.

pub mod contact_message;
pub mod project;
