//! Data models shared across the crate.
//!
//! - [`Game`]: canonical catalog item (single schema; release-status shape
//!   with a 0-5 star rating and a download count)
//! - [`User`]: registered account and the session's public profile
//!
//! Both serialize as camelCase JSON for the stored data format and the
//! TypeScript consumers (`ts` feature exports bindings).

pub mod game;
pub mod user;

pub use game::{Game, RATING_MAX};
pub use user::User;
