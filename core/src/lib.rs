pub mod algorithms;
pub mod api;
pub mod config;
pub mod errors;
pub mod menu;
