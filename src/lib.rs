// The binary in main.rs drives the terminal; everything it renders and
// animates lives here so integration tests and benchmarks can reach it.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod store;
pub mod ui;
