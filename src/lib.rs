// Exporter Agent - machine metrics-exporter lifecycle manager
// Library root

pub mod agent;
pub mod config;
pub mod error;
pub mod events;
pub mod exporter;
pub mod host;
pub mod status;

#[cfg(test)]
mod config_tests;
