// Camtrap Bench - Library root for testing

pub mod client;
pub mod config;
pub mod error;
pub mod labels;
pub mod query;
pub mod report;
pub mod runner;
