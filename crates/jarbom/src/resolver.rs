//! Choosing one coordinate per jar from the configured registries.
//!
//! Precedence, highest first:
//!
//! 1. A private-registry match outside the vendor group (the public index is
//!    not consulted).
//! 2. A public-registry match.
//! 3. A private-registry match in the vendor group.
//! 4. A synthetic coordinate built from the file name and fallback version.

use jarbom_central::MavenCentralRegistry;
use jarbom_core::{
    CoordinateRegistry, DEFAULT_VENDOR_GROUP, RegistryHttpClient, ResolvedCoordinate, Result,
    sha1_file,
};
use jarbom_nexus::NexusRegistry;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;

pub struct Resolver {
    private: Option<Arc<dyn CoordinateRegistry>>,
    public: Arc<dyn CoordinateRegistry>,
    vendor_group: String,
    fallback_version: String,
}

impl Resolver {
    pub fn new(
        private: Option<Arc<dyn CoordinateRegistry>>,
        public: Arc<dyn CoordinateRegistry>,
        fallback_version: impl Into<String>,
    ) -> Self {
        Self {
            private,
            public,
            vendor_group: DEFAULT_VENDOR_GROUP.to_string(),
            fallback_version: fallback_version.into(),
        }
    }

    #[must_use]
    pub fn with_vendor_group(mut self, vendor_group: impl Into<String>) -> Self {
        self.vendor_group = vendor_group.into();
        self
    }

    /// Wires Maven Central and, when a repo URL is configured, Nexus.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = RegistryHttpClient::new(config.timeout)?;

        let public: Arc<dyn CoordinateRegistry> = Arc::new(MavenCentralRegistry::with_base_url(
            http.clone(),
            config.central_url.clone(),
        ));
        let private = config.repo_url.as_ref().map(|url| {
            Arc::new(
                NexusRegistry::new(http.clone(), url.clone())
                    .with_vendor_group(config.vendor_group.clone()),
            ) as Arc<dyn CoordinateRegistry>
        });

        Ok(Self::new(private, public, config.fallback_version.clone())
            .with_vendor_group(config.vendor_group.clone()))
    }

    pub fn fallback_version(&self) -> &str {
        &self.fallback_version
    }

    /// Resolves a digest, using `file_name` for the fallback coordinate.
    pub async fn resolve_digest(&self, sha1: &str, file_name: &str) -> Result<ResolvedCoordinate> {
        let private_match = match &self.private {
            Some(private) => private.lookup(sha1).await?,
            None => None,
        };

        let private_match = match private_match {
            Some(coordinate) if !coordinate.is_vendor_group(&self.vendor_group) => {
                tracing::info!("{file_name}: {coordinate} from {}", coordinate.source);
                return Ok(coordinate);
            }
            other => other,
        };

        if let Some(coordinate) = self.public.lookup(sha1).await? {
            tracing::info!("{file_name}: {coordinate} from {}", coordinate.source);
            return Ok(coordinate);
        }

        if let Some(coordinate) = private_match {
            tracing::info!("{file_name}: {coordinate} from {} (vendor group)", coordinate.source);
            return Ok(coordinate);
        }

        tracing::warn!(
            "{file_name}: no registry match for {sha1}, using version {}",
            self.fallback_version
        );
        Ok(ResolvedCoordinate::unresolved(
            file_name,
            self.fallback_version.clone(),
        ))
    }

    /// Hashes a jar and resolves it.
    pub async fn resolve_jar(&self, path: &Path) -> Result<ResolvedCoordinate> {
        let sha1 = sha1_file(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.resolve_digest(&sha1, &file_name).await
    }

    /// Resolves every jar in turn and returns the coordinates sorted.
    ///
    /// Stops at the first error.
    pub async fn resolve_all(&self, paths: &[PathBuf]) -> Result<Vec<ResolvedCoordinate>> {
        let mut coordinates = Vec::with_capacity(paths.len());
        for path in paths {
            coordinates.push(self.resolve_jar(path).await?);
        }
        coordinates.sort();
        Ok(coordinates)
    }
}
