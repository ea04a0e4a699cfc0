//! # ootd domain
//!
//! Types and rules for an outfit-sharing backend: users post an image with a
//! description under a category, browse a feed, and like each other's posts.
//!
//! This crate performs no IO. Persistence and HTTP live in `ootd-server`,
//! which stores these types and serves them as JSON.
//!
//! ## Core Concepts
//!
//! - [`User`] and [`Role`]: registered accounts. Role code `0` is the
//!   administrator, who may delete any post.
//! - [`Actor`]: the authenticated party behind a request.
//! - [`PostDraft`] / [`NewPost`]: client input, validated before insertion.
//! - [`PostView`]: a post joined with owner, category and like data.
//! - [`LikeToggle`]: the like total after flipping a (user, post) like.
//! - [`Registration`]: sign-up input with its validation rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use ootd_domain::{PostDraft, Registration};
//!
//! let reg = Registration {
//!     username: "anna".into(),
//!     email: "anna@example.com".into(),
//!     password: "Secret123".into(),
//! };
//! assert!(reg.check().is_ok());
//!
//! let draft = PostDraft {
//!     image: "a.jpg".into(),
//!     description: "outfit".into(),
//!     category: 1,
//! };
//! let post = draft.into_new_post(42).unwrap();
//! assert_eq!(post.owner, 42);
//! ```

pub mod category;
pub mod error;
pub mod like;
pub mod post;
pub mod registration;
pub mod user;

// Re-export main types at crate root
pub use category::{Category, CategoryDraft};
pub use error::{Error, Result};
pub use like::{LikeOutcome, LikeToggle};
pub use post::{DeleteOutcome, NewPost, PostDraft, PostOwner, PostView};
pub use registration::{validate_password, Registration, MIN_PASSWORD_LEN};
pub use user::{Actor, Credentials, NewUser, Role, User};

/// Type aliases for clarity
pub type UserId = i32;
pub type PostId = i32;
pub type CategoryId = i32;
