//! JSON mapping between host snapshots and settings models

pub mod mapper;

pub use mapper::{general_from_section, notifications_from_section};
