//! Collaborator stores
//!
//! - ReadingStore: readings per smart meter
//! - PlanDirectory: plan assignments and plan definitions

pub mod plans;
pub mod readings;

pub use plans::{InMemoryPlanDirectory, PlanDirectory};
pub use readings::{InMemoryReadingStore, ReadingStore};
