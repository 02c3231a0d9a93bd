pub mod errors;
pub mod validate;

pub use errors::*;
