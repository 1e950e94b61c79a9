use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod damage;
pub mod pokemon;

pub use damage::{DamageRelations, TypeRecord, parse_type};
pub use pokemon::{PokemonRecord, TypeSlot, parse_pokemon};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// A reference to another API resource, as PokeAPI embeds them everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}
