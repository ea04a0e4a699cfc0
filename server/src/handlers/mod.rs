//! Request handlers: business flow between routes and the store.

mod auth;
mod categories;
mod likes;
mod posts;

pub use auth::*;
pub use categories::*;
pub use likes::*;
pub use posts::*;
