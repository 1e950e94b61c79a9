//! Domain types for matchup aggregation

mod definition;
mod effectiveness;
mod relations;

pub use definition::TypeDefinition;
pub use effectiveness::EffectivenessResult;
pub use relations::TypeRelations;
