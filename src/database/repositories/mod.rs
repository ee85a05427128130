pub mod shift;

// Re-export all repositories for easy importing
pub use shift::ShiftRepository;
