pub mod data_stores;
pub mod session_outcome;
pub mod session_state;
pub mod surface;
pub mod user_profile;

pub use data_stores::*;
pub use session_outcome::*;
pub use session_state::*;
pub use surface::*;
pub use user_profile::*;
