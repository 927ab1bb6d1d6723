pub mod recipe_data;

pub use recipe_data::*;
