pub mod records;
pub mod report;
pub mod time;

pub use records::*;
pub use report::*;
pub use time::*;
