pub mod app_state;
pub mod domain;
pub mod errors;
pub mod services;
pub mod utils;
