pub mod calendar;
pub mod config;
pub mod generator;
pub mod paths;

pub use config::Config;
pub use generator::{DayFolder, GenerateError, GenerateResult, Generator};
