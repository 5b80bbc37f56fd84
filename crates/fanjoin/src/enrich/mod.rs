mod batch;
mod config;
mod interface;
mod worker;

pub use batch::*;
pub use config::*;
pub use interface::*;
