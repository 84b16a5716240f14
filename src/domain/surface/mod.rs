pub mod navigator;
pub mod notifier;

pub use navigator::*;
pub use notifier::*;
