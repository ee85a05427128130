pub mod health;
pub mod shared;
pub mod shifts;
