pub mod health;
pub mod recipes;

pub use health::*;
pub use recipes::*;
