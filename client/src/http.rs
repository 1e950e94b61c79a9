use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use typedex_matchup::TypeDefinition;
use typedex_protocol::{parse_pokemon, parse_type};

use crate::catalog::{Catalog, Pokemon};
use crate::config::ClientConfig;
use crate::error::{CatalogError, ResourceKind};

/// [`Catalog`] backed by the PokeAPI REST endpoints
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base_url = Url::parse(&normalize_base_url(&config.api_url)).map_err(|e| {
            CatalogError::Unavailable(format!("invalid API URL '{}': {}", config.api_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Unavailable(format!(
                "invalid API URL '{}': not a base URL",
                config.api_url
            )));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resource URL with the name as a single percent-encoded path segment
    fn endpoint(&self, kind: ResourceKind, name: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(kind.path())
                .push(&name.to_lowercase());
        }
        url
    }

    /// GET a resource and return its body, mapping HTTP failures
    async fn fetch(&self, kind: ResourceKind, name: &str) -> Result<String, CatalogError> {
        let url = self.endpoint(kind, name);
        tracing::debug!(url = %url, "Fetching catalog resource");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Catalog request failed");
            CatalogError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                kind,
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Catalog returned an error status");
            return Err(CatalogError::Unavailable(format!(
                "{} returned {}",
                url, status
            )));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Catalog for PokeApiClient {
    async fn pokemon(&self, name: &str) -> Result<Pokemon, CatalogError> {
        let body = self.fetch(ResourceKind::Pokemon, name).await?;
        let record = parse_pokemon(&body).map_err(|source| CatalogError::Malformed {
            kind: ResourceKind::Pokemon,
            source,
        })?;
        Ok(record.into())
    }

    async fn type_definition(&self, name: &str) -> Result<TypeDefinition, CatalogError> {
        let body = self.fetch(ResourceKind::Type, name).await?;
        let record = parse_type(&body).map_err(|source| CatalogError::Malformed {
            kind: ResourceKind::Type,
            source,
        })?;
        Ok(record.into())
    }
}

fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
