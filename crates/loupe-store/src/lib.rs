//! Loose object store access for loupe.
//!
//! This crate is the I/O half of the decoding pipeline: it resolves a
//! content hash to its on-disk path in the two-level fan-out layout, reads
//! and inflates the zlib-compressed bytes, and hands the envelope to
//! `loupe-object` for parsing. It also reads ref files, the text files that
//! bootstrap a decode with a starting identifier.
//!
//! # Design Rules
//!
//! 1. Read-only: this crate never writes to the store.
//! 2. Blocking, synchronous I/O; one scoped file handle per call.
//! 3. Errors stay typed end to end — `NotFound` vs `Decompression` vs
//!    `Malformed` are distinct variants, never one opaque failure.

pub mod error;
pub mod loose;
pub mod refs;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use loose::LooseStore;
pub use refs::read_ref_file;
