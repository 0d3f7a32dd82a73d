pub mod config;
pub mod diagnosis;
