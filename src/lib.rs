pub mod business;
pub mod client;
pub mod config;
pub mod filter;
pub mod logging;
pub mod mvi;
pub mod screen;
