
use crate::{NamedResource, ParseError};
use serde::{Deserialize, Serialize};

/// Body of `GET /pokemon/{name}`, trimmed to the fields we read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl PokemonRecord {
    /// Type names ordered by slot (primary first)
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.clone()).collect()
    }
}

/// Parse a pokemon response body
pub fn parse_pokemon(body: &str) -> Result<PokemonRecord, ParseError> {
    let record: PokemonRecord = serde_json::from_str(body)?;

    if record.name.is_empty() {
        return Err(ParseError::MissingField("pokemon name".to_string()));
    }

    Ok(record)
}
