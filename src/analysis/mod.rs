//! The analysis core. Every function in here is pure: it reads an in-memory slice
//! of records and returns a fresh result without touching its input.

pub mod comfort;
pub mod data_quality;
pub mod day_of_year;
pub mod regression;
pub mod soil_moisture;
pub mod statistics;
pub mod summary;
pub mod trend;
pub mod window;
