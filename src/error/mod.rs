pub mod station;

pub use station::{StationError, StationResult};
