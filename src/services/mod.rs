pub mod api_client;
pub mod data_stores;
pub mod session_guard;
pub mod surface;

pub use api_client::*;
pub use data_stores::*;
pub use session_guard::*;
pub use surface::*;
