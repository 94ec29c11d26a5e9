//! Faultline Core - Path-addressable validation error collections
//!
//! This crate provides the foundational types for working with field
//! validation errors:
//! - `ErrorRecord`: A single validation message with an optional field path
//! - `ErrorCollection`: A tree of records addressed by dotted paths, with
//!   sub-tree navigation and structural merging
//! - `ErrorPath`: The argument trait that lets lookups accept dotted
//!   strings, numeric indices and pre-split segment slices

pub mod collection;
pub mod path;
pub mod record;

pub use collection::ErrorCollection;
pub use path::ErrorPath;
pub use record::ErrorRecord;
