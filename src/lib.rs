pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod link;
pub mod logging;
pub mod model;
pub mod output;
pub mod state;
pub mod ui;
