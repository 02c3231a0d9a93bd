pub mod auth;
pub mod session;

pub use auth::PasswordManager;
pub use session::SessionStore;
