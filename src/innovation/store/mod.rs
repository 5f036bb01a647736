//! # Storage Layer
//!
//! Ideas are persisted as one JSON blob under a single key. The [`BlobStore`]
//! trait is the "how" (filesystem vs memory); [`idea_store::IdeaStore`] is the
//! "what": it owns the in-memory collection and rewrites the whole blob after
//! every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FsBlobStore`]: Production store, one `<key>.json` file per key
//!   inside a data directory, written atomically (tmp file + rename).
//! - [`memory::MemBlobStore`]: In-memory store for testing, with write error
//!   simulation.
//!
//! ## Blob Format
//!
//! ```text
//! [
//!   {
//!     "id": "5f0c…",
//!     "title": "Solar Roof",
//!     "description": "…",
//!     "rank": 3,
//!     "traits": [{ "name": "Technical Feasibility", "value": 5 }, …],
//!     "resources": [{ "type": "link", "name": "…", "url": "…" }],
//!     "process": ["…"],
//!     "createdAt": "2024-05-01T10:00:00Z"
//!   }
//! ]
//! ```
//!
//! There is no versioning and no partial write: the blob is always the full
//! collection.

use crate::error::Result;

pub mod fs;
pub mod idea_store;
pub mod memory;

/// Abstract key-value storage for serialized blobs.
///
/// Methods take `&self`; implementations that need mutation use interior
/// mutability (the application is single-threaded).
pub trait BlobStore {
    /// Read the blob stored under `key`.
    /// Returns Ok(None) when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn write(&self, key: &str, blob: &str) -> Result<()>;
}
