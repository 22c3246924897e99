pub mod actions;
pub mod animation;
pub mod config;
pub mod curves;
pub mod data;
pub mod ports;
pub mod turtle;
pub mod util;
