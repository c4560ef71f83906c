//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.
//! Each handler works on a bootstrapped [`AppState`](crate::AppState).

pub mod check;
pub mod domains;
pub mod resolve;

pub use check::CheckCommandHandler;
pub use domains::DomainsCommandHandler;
pub use resolve::ResolveCommandHandler;
