//! Core abstractions for jarbom.
//!
//! This crate holds the pieces shared by every registry client and by the
//! resolver: the [`ResolvedCoordinate`] value type and its ordering, the
//! crate-wide error type, the SHA-1 file hasher, the [`CoordinateRegistry`]
//! trait, and a thin HTTP helper that maps registry status codes onto
//! "found", "not found", and "error".

pub mod digest;
pub mod error;
pub mod http;
pub mod json;
pub mod registry;
pub mod types;

pub use digest::{sha1_file, sha1_hex};
pub use error::{JarBomError, Result};
pub use http::{DEFAULT_TIMEOUT, RegistryHttpClient};
pub use registry::CoordinateRegistry;
pub use types::{CoordinateSource, DEFAULT_VENDOR_GROUP, ResolvedCoordinate};
