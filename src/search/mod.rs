pub mod config;
pub mod evaluation;
pub mod parallel_search;

pub use config::*;
pub use evaluation::*;
pub use parallel_search::*;
