mod interface;
mod short_token;
mod thread_random;

pub use interface::*;
pub use short_token::*;
pub use thread_random::*;
