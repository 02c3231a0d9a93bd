pub use admins::*;
pub use contacts::*;
pub use db::Database;
pub use newsletters::*;
pub use portfolio::*;
pub use seed::*;

mod admins;
mod contacts;
#[allow(clippy::module_inception)]
mod db;
mod newsletters;
mod portfolio;
mod seed;
