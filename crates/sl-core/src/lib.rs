//! sui-laughs/crates/sl-core/src/lib.rs
//!
//! The central feed logic and interface definitions for SuiLaughs.

pub mod error;
pub mod format;
pub mod ledger;
pub mod models;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use service::{FeedService, FeedSnapshot};
pub use session::{ConnectionState, Session};
pub use store::{ContentStore, FeedStats};
pub use traits::*;
