//! Nexus repository manager integration.
//!
//! Identifies jars by SHA-1 through the Nexus `search/assets` REST endpoint
//! of a private repository, preferring externally attributed groups over the
//! vendor's placeholder group when several assets share a digest.

pub mod registry;
pub mod select;

pub use registry::{NexusRegistry, lookup_url};
pub use select::select_preferred;
