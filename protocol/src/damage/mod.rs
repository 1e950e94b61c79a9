
use crate::{NamedResource, ParseError};
use serde::{Deserialize, Serialize};

/// Body of `GET /type/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

/// The six damage-relation lists of a type.
///
/// The `*_to` lists describe this type's attacks against others, the
/// `*_from` lists describe others' attacks against this type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageRelations {
    pub double_damage_to: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
}

/// Parse a type response body
pub fn parse_type(body: &str) -> Result<TypeRecord, ParseError> {
    let record: TypeRecord = serde_json::from_str(body)?;

    if record.name.is_empty() {
        return Err(ParseError::MissingField("type name".to_string()));
    }

    Ok(record)
}
