pub mod course;
pub mod filter;
pub mod place;
pub mod utils;

pub use course::*;
pub use filter::*;
pub use place::*;
pub use utils::*;
