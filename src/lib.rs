pub mod config;
pub mod logging;
pub mod todo;
pub mod tui;
