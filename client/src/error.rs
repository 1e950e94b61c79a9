use std::fmt;

use thiserror::Error;
use typedex_protocol::ParseError;

/// Which catalog endpoint a request went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Pokemon,
    Type,
}

impl ResourceKind {
    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Pokemon => "pokemon",
            ResourceKind::Type => "type",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Pokemon => write!(f, "Pokemon"),
            ResourceKind::Type => write!(f, "Type"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ResourceKind, name: String },

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed {kind} response: {source}")]
    Malformed {
        kind: ResourceKind,
        #[source]
        source: ParseError,
    },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Unavailable(e.to_string())
    }
}
