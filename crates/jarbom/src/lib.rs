//! Resolve Maven coordinates for jar files by content hash.
//!
//! Given a single jar, [`run`] prints one `repo,groupId,artifactId,version`
//! line. Given a directory, it resolves every jar inside and prints a
//! bill-of-materials POM listing them.

pub mod config;
pub mod output;
pub mod pom;
pub mod resolver;
pub mod scan;

use std::io::{ErrorKind, Write};

pub use config::{Cli, Config};
pub use jarbom_core::{CoordinateSource, JarBomError, ResolvedCoordinate, Result};
pub use resolver::Resolver;

/// Resolves the configured path and writes the result to `out`.
///
/// Nothing is written unless every jar resolved.
pub async fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let resolver = Resolver::from_config(config)?;
    let metadata = match tokio::fs::metadata(&config.path).await {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(JarBomError::InvalidInput {
                path: config.path.clone(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let rendered = if metadata.is_file() {
        let coordinate = resolver.resolve_jar(&config.path).await?;
        output::coordinate_line(&coordinate)
    } else if metadata.is_dir() {
        let jars = scan::find_jars(&config.path).await?;
        let coordinates = resolver.resolve_all(&jars).await?;
        tracing::info!(
            "resolved {} jars, {} unresolved",
            coordinates.len(),
            coordinates
                .iter()
                .filter(|c| c.source == CoordinateSource::Unresolved)
                .count()
        );
        pom::render_bom(&coordinates, resolver.fallback_version())?
    } else {
        return Err(JarBomError::InvalidInput {
            path: config.path.clone(),
        });
    };

    writeln!(out, "{rendered}")?;
    Ok(())
}
