//! Authentication: password hashing, bearer tokens, and request extractors.

mod middleware;
pub mod password;
mod token;

pub use middleware::{AuthUser, OptionalAuthUser};
pub use token::{Claims, TokenKeys};
