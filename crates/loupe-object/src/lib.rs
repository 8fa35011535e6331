//! Object envelope decoding for loupe.
//!
//! Loose objects in a content-addressed store are zlib-compressed envelopes
//! of the form `<type> <size>\0<body>`. This crate holds everything needed
//! to turn a decompressed envelope into a structured record, with no I/O:
//!
//! - [`ObjectId`] — 40-hex-character content-addressed identifier
//! - [`Separator`] — bounded split primitive (literal or regex separators)
//! - [`parse_object`] — envelope → [`ObjectInfo`]
//! - [`FieldMap`] — ordered multimap for commit header fields
//!
//! # Design Rules
//!
//! 1. Decoding is a pure single pass; nothing is retained between calls.
//! 2. All-or-nothing: a malformed envelope never yields a partial record.
//! 3. Failures are typed; callers can tell a bad id from a corrupt body.

pub mod error;
pub mod id;
pub mod parse;
pub mod record;
pub mod split;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{ParseError, ParseResult};
pub use id::ObjectId;
pub use parse::parse_object;
pub use record::{FieldMap, ObjectInfo, ObjectKind};
pub use split::Separator;
