//! Cache module backing secret resolution.
//!
//! Entries are created lazily on first successful computation and live for the
//! lifetime of the owning `AppState`:
//! - no TTL and no eviction
//! - concurrent misses for one key collapse into a single computation
//! - failed computations are never stored
//!
//! # Usage
//!
//! ```ignore
//! let cache = MemoryCache::<(String, String), String>::new();
//! let value = cache
//!     .get_or_try_init((domain, key), || async { store.access_secret(name).await })
//!     .await?;
//! ```

mod memory;

pub use memory::MemoryCache;
