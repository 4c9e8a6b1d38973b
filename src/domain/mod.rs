pub mod announcement;
pub mod feed;

pub use announcement::*;
pub use feed::*;
