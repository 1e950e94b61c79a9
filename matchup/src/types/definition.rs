use typedex_protocol::TypeRecord;

use super::relations::TypeRelations;

/// A named type and its damage relations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDefinition {
    pub name: String,
    pub relations: TypeRelations,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>, relations: TypeRelations) -> Self {
        Self {
            name: name.into(),
            relations,
        }
    }
}

impl From<TypeRecord> for TypeDefinition {
    fn from(record: TypeRecord) -> Self {
        Self {
            name: record.name,
            relations: record.damage_relations.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_protocol::parse_type;

    #[test]
    fn test_from_type_record() {
        let record = parse_type(
            r#"{"name": "grass", "damage_relations": {
                "double_damage_from": [{"name": "fire", "url": ""}, {"name": "ice", "url": ""}]
            }}"#,
        )
        .unwrap();

        let definition = TypeDefinition::from(record);

        assert_eq!(definition.name, "grass");
        assert_eq!(definition.relations.double_damage_from, vec!["fire", "ice"]);
        assert!(definition.relations.half_damage_to.is_empty());
    }
}
