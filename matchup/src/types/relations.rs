//! Damage relations of a single type

use typedex_protocol::{DamageRelations, NamedResource};

/// The six damage-relation lists of one type, reduced to type names.
///
/// Lists carry no ordering or uniqueness guarantee; whatever the catalog
/// returned is kept as-is. An empty list simply contributes nothing to
/// aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeRelations {
    /// Types this type's attacks hit for double damage
    pub double_damage_to: Vec<String>,

    /// Types that resist this type's attacks
    pub half_damage_to: Vec<String>,

    /// Types immune to this type's attacks
    pub no_damage_to: Vec<String>,

    /// Types whose attacks hit this type for double damage
    pub double_damage_from: Vec<String>,

    /// Types whose attacks this type resists
    pub half_damage_from: Vec<String>,

    /// Types whose attacks this type is immune to
    pub no_damage_from: Vec<String>,
}

fn names<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl TypeRelations {
    pub fn with_double_damage_to<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.double_damage_to = names(types);
        self
    }

    pub fn with_half_damage_to<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.half_damage_to = names(types);
        self
    }

    pub fn with_no_damage_to<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.no_damage_to = names(types);
        self
    }

    pub fn with_double_damage_from<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.double_damage_from = names(types);
        self
    }

    pub fn with_half_damage_from<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.half_damage_from = names(types);
        self
    }

    pub fn with_no_damage_from<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.no_damage_from = names(types);
        self
    }

    /// Check whether every list is empty
    pub fn is_empty(&self) -> bool {
        self.double_damage_to.is_empty()
            && self.half_damage_to.is_empty()
            && self.no_damage_to.is_empty()
            && self.double_damage_from.is_empty()
            && self.half_damage_from.is_empty()
            && self.no_damage_from.is_empty()
    }
}

fn resource_names(resources: Vec<NamedResource>) -> Vec<String> {
    resources.into_iter().map(|r| r.name).collect()
}

impl From<DamageRelations> for TypeRelations {
    fn from(relations: DamageRelations) -> Self {
        Self {
            double_damage_to: resource_names(relations.double_damage_to),
            half_damage_to: resource_names(relations.half_damage_to),
            no_damage_to: resource_names(relations.no_damage_to),
            double_damage_from: resource_names(relations.double_damage_from),
            half_damage_from: resource_names(relations.half_damage_from),
            no_damage_from: resource_names(relations.no_damage_from),
        }
    }
}
