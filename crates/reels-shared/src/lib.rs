//! # reels-shared
//!
//! Domain models and constants shared by every crate in the workspace.
//!
//! Everything here is a plain serde-serializable record: the store crate
//! persists these types as JSON, and the client crate holds them in its
//! in-memory session state.

pub mod constants;
pub mod models;
pub mod seed;
pub mod types;

pub use models::*;
pub use types::{Plan, ProcessStatus, VideoStatus};
