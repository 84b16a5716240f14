pub mod token_store;
pub mod token_store_err;

pub use token_store::*;
pub use token_store_err::*;
