pub mod models;

// Re-export all models for external use
pub use models::*;
