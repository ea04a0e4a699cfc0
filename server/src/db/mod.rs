//! Data access: the `Store` contract and its PostgreSQL and in-memory backends.

mod categories;
mod error;
mod likes;
mod memory;
mod pool;
mod postgres;
mod posts;
mod rows;
mod store;
mod users;

pub use categories::*;
pub use error::*;
pub use likes::*;
pub use memory::MemoryStore;
pub use pool::*;
pub use postgres::PgStore;
pub use posts::*;
pub use store::Store;
pub use users::*;
