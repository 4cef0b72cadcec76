pub mod macros;
pub mod schedule;
pub mod time;

pub use schedule::*;
pub use time::*;
