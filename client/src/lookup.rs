use typedex_matchup::{EffectivenessResult, TypeDefinition};

use crate::catalog::{Catalog, Pokemon};
use crate::error::CatalogError;

/// Everything needed to present one Pokemon's matchups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupReport {
    pub pokemon: Pokemon,
    /// Resolved types in slot order
    pub types: Vec<TypeDefinition>,
    pub effectiveness: EffectivenessResult,
}

/// Outcome of a lookup that reached the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Matchup(MatchupReport),
    /// The Pokemon exists but none of its types could be resolved
    NoTypeInformation(Pokemon),
}

/// Resolve a Pokemon and aggregate the matchups of its types.
///
/// Types are fetched one at a time in slot order. A type that fails to
/// resolve is logged and left out; only a failure to resolve the Pokemon
/// itself is returned as an error.
pub async fn lookup<C>(catalog: &C, name: &str) -> Result<Lookup, CatalogError>
where
    C: Catalog + ?Sized,
{
    let pokemon = catalog.pokemon(name).await?;

    let mut types = Vec::with_capacity(pokemon.type_names.len());
    for type_name in &pokemon.type_names {
        match catalog.type_definition(type_name).await {
            Ok(definition) => types.push(definition),
            Err(e) => {
                tracing::warn!(
                    pokemon = %pokemon.name,
                    type_name = %type_name,
                    error = %e,
                    "Skipping type that could not be resolved"
                );
            }
        }
    }

    if types.is_empty() {
        return Ok(Lookup::NoTypeInformation(pokemon));
    }

    let effectiveness = EffectivenessResult::compute(&types);
    tracing::debug!(
        pokemon = %pokemon.name,
        strong = effectiveness.strong_against.len(),
        weak = effectiveness.weak_against.len(),
        "Matchups aggregated"
    );

    Ok(Lookup::Matchup(MatchupReport {
        pokemon,
        types,
        effectiveness,
    }))
}
