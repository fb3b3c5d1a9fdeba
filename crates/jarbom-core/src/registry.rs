use crate::error::Result;
use crate::types::ResolvedCoordinate;
use async_trait::async_trait;

/// An artifact registry that can identify a jar by its SHA-1 digest.
///
/// Implementors query one remote index and return at most one coordinate.
///
/// # Returns
///
/// - `Ok(Some(coordinate))` - The registry recognised the digest
/// - `Ok(None)` - Not found, or every candidate lacked an artifactId or version
/// - `Err(_)` - Transport failure, unexpected HTTP status, or malformed body
///
/// # Examples
///
/// ```no_run
/// use async_trait::async_trait;
/// use jarbom_core::{CoordinateRegistry, CoordinateSource, ResolvedCoordinate};
///
/// struct FixedRegistry;
///
/// #[async_trait]
/// impl CoordinateRegistry for FixedRegistry {
///     fn name(&self) -> &'static str {
///         "Fixed"
///     }
///
///     async fn lookup(&self, _sha1: &str) -> jarbom_core::Result<Option<ResolvedCoordinate>> {
///         Ok(Some(ResolvedCoordinate::new(
///             CoordinateSource::Public,
///             Some("org.example".into()),
///             "example",
///             "1.0",
///         )))
///     }
/// }
/// ```
#[async_trait]
pub trait CoordinateRegistry: Send + Sync {
    /// Human-readable registry name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Looks up the coordinate for a lowercase hex SHA-1 digest.
    async fn lookup(&self, sha1: &str) -> Result<Option<ResolvedCoordinate>>;
}
