//! Maven Central registry client.

use jarbom_core::{
    CoordinateRegistry, CoordinateSource, JarBomError, RegistryHttpClient, ResolvedCoordinate,
    Result,
};
use jarbom_core::json::lenient_string;
use serde::Deserialize;

pub const MAVEN_CENTRAL_BASE: &str = "https://search.maven.org";

const REGISTRY_NAME: &str = "Maven Central";

/// Builds the solrsearch URL that finds artifacts by SHA-1.
pub fn lookup_url(base: &str, sha1: &str) -> String {
    format!(
        "{base}/solrsearch/select?q=1:{sha1}&wt=json",
        base = base.trim_end_matches('/'),
        sha1 = urlencoding::encode(sha1),
    )
}

#[derive(Debug, Clone)]
pub struct MavenCentralRegistry {
    http: RegistryHttpClient,
    base_url: String,
}

impl MavenCentralRegistry {
    pub fn new(http: RegistryHttpClient) -> Self {
        Self::with_base_url(http, MAVEN_CENTRAL_BASE)
    }

    /// Points the client at a mirror or test server instead of search.maven.org.
    pub fn with_base_url(http: RegistryHttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn lookup_typed(&self, sha1: &str) -> Result<Option<ResolvedCoordinate>> {
        let url = lookup_url(&self.base_url, sha1);
        match self.http.get(REGISTRY_NAME, &url).await? {
            Some(data) => parse_lookup_response(&data),
            None => Ok(None),
        }
    }
}

// Missing, null, and mistyped fields all read as "no match".
#[derive(Deserialize)]
struct SolrLookupResponse {
    #[serde(default)]
    response: Option<SolrLookupBody>,
}

#[derive(Deserialize)]
struct SolrLookupBody {
    #[serde(default)]
    docs: Option<Vec<LookupDoc>>,
}

#[derive(Deserialize)]
struct LookupDoc {
    #[serde(default, deserialize_with = "lenient_string")]
    g: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    a: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    v: Option<String>,
}

fn parse_lookup_response(data: &[u8]) -> Result<Option<ResolvedCoordinate>> {
    let response: SolrLookupResponse =
        serde_json::from_slice(data).map_err(|source| JarBomError::ApiResponse {
            registry: REGISTRY_NAME,
            source,
        })?;

    // Only the first doc is considered.
    let Some(doc) = response
        .response
        .and_then(|body| body.docs)
        .and_then(|docs| docs.into_iter().next())
    else {
        return Ok(None);
    };

    let coordinate = ResolvedCoordinate::from_parts(CoordinateSource::Public, doc.g, doc.a, doc.v);
    if coordinate.is_none() {
        tracing::debug!("{REGISTRY_NAME} doc lacks artifactId or version");
    }
    Ok(coordinate)
}

#[async_trait::async_trait]
impl CoordinateRegistry for MavenCentralRegistry {
    fn name(&self) -> &'static str {
        REGISTRY_NAME
    }

    async fn lookup(&self, sha1: &str) -> Result<Option<ResolvedCoordinate>> {
        self.lookup_typed(sha1).await
    }
}
