pub mod error;
pub mod utils;

pub use error::{DocError, Result};
pub use utils::{char_len, log_filter_error};
