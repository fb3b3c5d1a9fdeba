//! Maven Central integration.
//!
//! Identifies jars by SHA-1 through the Maven Central solrsearch API.

pub mod registry;

pub use registry::{MAVEN_CENTRAL_BASE, MavenCentralRegistry, lookup_url};
