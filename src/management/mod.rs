//! High-level state management.
//!
//! Currently this is only the in-memory [`TokenManager`], the single shared
//! store for the OAuth token pair. Nothing here is persisted; a restart
//! always requires a fresh login flow.

mod token;

pub use token::TokenManager;
