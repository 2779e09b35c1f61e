//! trigsum library: application logic for the series comparison driver.

pub mod app;
pub mod config;
pub mod errors;
