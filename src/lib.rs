pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod explorer;
pub mod marketplace;
