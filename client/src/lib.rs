mod catalog;
mod config;
mod error;
mod http;
mod lookup;

pub use catalog::{Catalog, Pokemon};
pub use config::ClientConfig;
pub use error::{CatalogError, ResourceKind};
pub use http::PokeApiClient;
pub use lookup::{Lookup, MatchupReport, lookup};

pub use typedex_matchup::{EffectivenessResult, TypeDefinition, TypeRelations, format_type_name};

/// Public PokeAPI v2 base URL
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/";
