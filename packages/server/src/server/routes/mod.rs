// HTTP routes
pub mod rates;

pub use rates::*;
