pub mod auth;
pub mod config;
pub mod consts;
pub mod urls;

pub use config::*;
pub use consts::*;
