pub mod ingredients;
pub mod preferences;
pub mod recipe;

pub use ingredients::*;
pub use preferences::*;
pub use recipe::*;
