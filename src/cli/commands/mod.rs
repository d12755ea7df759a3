//! Command implementations.

pub mod admin;
pub mod collection;
pub mod opportunities;
