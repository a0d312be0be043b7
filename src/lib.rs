pub mod config;
pub mod consts;
pub mod forms;
pub mod models;
pub mod utils;
