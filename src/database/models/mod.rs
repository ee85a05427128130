pub mod shift;

// Re-export all models for easy importing
pub use shift::*;
