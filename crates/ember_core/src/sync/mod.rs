//! # Shared Access
//!
//! Index and storage types are single-owner. When several systems need the
//! same storage across threads, they go through a lock owned by the caller:
//!
//! ```text
//! Frame N:
//!   Logic   write() ── insert / remove / mutate
//!   Render  read()  ── iterate live payloads
//! ```
//!
//! Readers never observe a half-finished swap-and-pop because removals only
//! happen under the write guard.

mod shared;

pub use shared::SharedStorage;
