//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod logs;
pub mod modal;
pub mod statistics;
pub mod users;
pub mod wheels;
