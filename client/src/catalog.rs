use async_trait::async_trait;
use typedex_matchup::TypeDefinition;
use typedex_protocol::PokemonRecord;

use crate::error::CatalogError;

/// A Pokemon as the lookup needs it: identity plus type names in slot order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub type_names: Vec<String>,
}

impl From<PokemonRecord> for Pokemon {
    fn from(record: PokemonRecord) -> Self {
        let type_names = record.type_names();
        Self {
            id: record.id,
            name: record.name,
            type_names,
        }
    }
}

/// Source of Pokemon and type data.
///
/// [`PokeApiClient`](crate::PokeApiClient) is the HTTP implementation. Any
/// failure is reported as a [`CatalogError`]; implementations must not panic
/// on missing or malformed data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolve a Pokemon by name
    async fn pokemon(&self, name: &str) -> Result<Pokemon, CatalogError>;

    /// Resolve a type and its damage relations by name
    async fn type_definition(&self, name: &str) -> Result<TypeDefinition, CatalogError>;
}
