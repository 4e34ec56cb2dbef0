pub mod api;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
