//! HTTP plumbing shared by the registry clients.
//!
//! Registries answer a digest lookup with 200 (body to parse), 404 (no
//! match), or anything else (fatal for this run). [`RegistryHttpClient::get`]
//! folds those three outcomes into `Ok(Some(body))`, `Ok(None)`, and `Err`.

use crate::error::{JarBomError, Result};
use bytes::Bytes;
use reqwest::StatusCode;
use std::time::Duration;

/// Request timeout applied when the caller does not choose one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("jarbom/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RegistryHttpClient {
    client: reqwest::Client,
}

impl RegistryHttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(JarBomError::ClientBuild)?;
        Ok(Self { client })
    }

    /// Fetches `url`, returning the body on 200 and `None` on 404.
    ///
    /// `registry` names the remote in logs and errors.
    pub async fn get(&self, registry: &'static str, url: &str) -> Result<Option<Bytes>> {
        tracing::debug!("{registry} GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| JarBomError::Http {
                registry,
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("{registry} responded {status}");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status != StatusCode::OK {
            return Err(JarBomError::UnexpectedStatus {
                registry,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| JarBomError::Http {
            registry,
            url: url.to_string(),
            source,
        })?;
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RegistryHttpClient {
        RegistryHttpClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_ok_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/lookup")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let body = client()
            .get("Test", &format!("{}/lookup", server.url()))
            .await
            .unwrap();
        assert_eq!(body.as_deref(), Some(&b"{}"[..]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_not_found_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup")
            .with_status(404)
            .create_async()
            .await;

        let body = client()
            .get("Test", &format!("{}/lookup", server.url()))
            .await
            .unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_get_other_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup")
            .with_status(500)
            .create_async()
            .await;

        let err = client()
            .get("Test", &format!("{}/lookup", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            JarBomError::UnexpectedStatus { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_get_non_ok_success_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/lookup")
            .with_status(204)
            .create_async()
            .await;

        let err = client()
            .get("Test", &format!("{}/lookup", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            JarBomError::UnexpectedStatus { status: 204, .. }
        ));
    }
}
