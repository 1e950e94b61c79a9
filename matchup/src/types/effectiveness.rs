use super::definition::TypeDefinition;
use crate::query::{strong_against, weak_against};

/// Strong/weak sets for one type combination.
///
/// Both lists are sorted ascending and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessResult {
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
}

impl EffectivenessResult {
    /// Aggregate both sets over all given types
    pub fn compute(types: &[TypeDefinition]) -> Self {
        Self {
            strong_against: strong_against(types),
            weak_against: weak_against(types),
        }
    }
}
