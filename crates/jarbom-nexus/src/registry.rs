//! Nexus `search/assets` client.

use crate::select::select_preferred;
use jarbom_core::{
    CoordinateRegistry, CoordinateSource, DEFAULT_VENDOR_GROUP, JarBomError, RegistryHttpClient,
    ResolvedCoordinate, Result,
};
use jarbom_core::json::lenient_string;
use serde::Deserialize;

const REGISTRY_NAME: &str = "Nexus";

/// Appends the digest to a search URL that already selects a repository,
/// e.g. `https://nexus/service/rest/v1/search/assets?repository=releases`.
pub fn lookup_url(search_url: &str, sha1: &str) -> String {
    format!("{search_url}&sha1={}", urlencoding::encode(sha1))
}

#[derive(Debug, Clone)]
pub struct NexusRegistry {
    http: RegistryHttpClient,
    search_url: String,
    vendor_group: String,
}

impl NexusRegistry {
    pub fn new(http: RegistryHttpClient, search_url: impl Into<String>) -> Self {
        Self {
            http,
            search_url: search_url.into(),
            vendor_group: DEFAULT_VENDOR_GROUP.to_string(),
        }
    }

    /// Overrides the placeholder group that later assets may replace.
    #[must_use]
    pub fn with_vendor_group(mut self, vendor_group: impl Into<String>) -> Self {
        self.vendor_group = vendor_group.into();
        self
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    pub async fn lookup_typed(&self, sha1: &str) -> Result<Option<ResolvedCoordinate>> {
        let url = lookup_url(&self.search_url, sha1);
        match self.http.get(REGISTRY_NAME, &url).await? {
            Some(data) => parse_search_response(&data, &self.vendor_group),
            None => Ok(None),
        }
    }
}

// Missing, null, and mistyped fields all read as "no match".
#[derive(Deserialize)]
struct AssetSearchResponse {
    #[serde(default)]
    items: Option<Vec<Asset>>,
}

#[derive(Deserialize)]
struct Asset {
    #[serde(default, deserialize_with = "lenient_string")]
    path: Option<String>,
    #[serde(default)]
    maven2: Option<Maven2Attributes>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Maven2Attributes {
    #[serde(default, deserialize_with = "lenient_string")]
    group_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    artifact_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    version: Option<String>,
}

fn parse_search_response(data: &[u8], vendor_group: &str) -> Result<Option<ResolvedCoordinate>> {
    let response: AssetSearchResponse =
        serde_json::from_slice(data).map_err(|source| JarBomError::ApiResponse {
            registry: REGISTRY_NAME,
            source,
        })?;

    let candidates = response.items.unwrap_or_default().into_iter().filter_map(|asset| {
        let coordinate = asset.maven2.and_then(|m| {
            ResolvedCoordinate::from_parts(
                CoordinateSource::Private,
                m.group_id,
                m.artifact_id,
                m.version,
            )
        });
        if coordinate.is_none() {
            tracing::debug!(
                "skipping {REGISTRY_NAME} asset without maven2 coordinates: {}",
                asset.path.as_deref().unwrap_or("<unknown path>")
            );
        }
        coordinate
    });

    Ok(select_preferred(candidates, vendor_group))
}

#[async_trait::async_trait]
impl CoordinateRegistry for NexusRegistry {
    fn name(&self) -> &'static str {
        REGISTRY_NAME
    }

    async fn lookup(&self, sha1: &str) -> Result<Option<ResolvedCoordinate>> {
        self.lookup_typed(sha1).await
    }
}
