//! Infrastructure layer - snapshot JSON mapping

pub mod snapshot;
