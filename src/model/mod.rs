// File: ./src/model/mod.rs
pub mod display;
pub mod item;

pub use item::{RegistrationState, School, parse_timestamp};
