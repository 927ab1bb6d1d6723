pub mod likes;
pub mod queries;
pub mod sync;

pub use likes::*;
pub use queries::*;
pub use sync::*;
