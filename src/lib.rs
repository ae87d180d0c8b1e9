pub mod cli;
pub mod config;
pub mod lines;
pub mod ranking;
