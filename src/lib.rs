pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod manifest;
pub mod runner;
pub mod utils;
