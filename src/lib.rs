pub mod analyzers;
pub mod commands;
pub mod config;
pub mod parsers;
pub mod report;
pub mod types;
