pub mod bots;
pub mod config;
pub mod hlt;
pub mod logging;
pub mod runner;
