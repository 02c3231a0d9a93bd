pub use admin::*;
pub use contact::*;
pub use newsletter::*;
pub use portfolio::*;

mod admin;
mod contact;
mod newsletter;
mod portfolio;
