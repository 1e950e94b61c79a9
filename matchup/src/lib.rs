//! Type relation records and matchup aggregation for Pokemon types.
//!
//! # Overview
//!
//! `typedex-matchup` sits between `typedex-protocol` (wire format) and the
//! lookup client:
//!
//! ```text
//! typedex-protocol (PokeAPI JSON)
//!        │
//!        ▼
//! typedex-matchup (relations + aggregation) ← THIS CRATE
//!        │
//!        └─> typedex-client (fetches records, builds reports)
//! ```
//!
//! Nothing in here performs I/O. Callers hand over already-resolved
//! [`TypeDefinition`]s and get back plain name sets.
//!
//! # Main Types
//!
//! - [`TypeRelations`] - The six damage-relation lists of one type
//! - [`TypeDefinition`] - A type name with its relations
//! - [`EffectivenessResult`] - Merged strong/weak sets for a type combination
//!
//! # Example Usage
//!
//! ```
//! use typedex_matchup::{EffectivenessResult, TypeDefinition, TypeRelations, format_type_name};
//!
//! let ghost = TypeDefinition::new(
//!     "ghost",
//!     TypeRelations::default().with_no_damage_from(["normal", "fighting"]),
//! );
//!
//! let result = EffectivenessResult::compute(&[ghost]);
//! assert_eq!(result.strong_against, vec!["fighting", "normal"]);
//! assert_eq!(format_type_name("ghost"), "Ghost");
//! ```

pub mod display;
pub mod query;
pub mod types;

pub use display::format_type_name;
pub use query::{strong_against, weak_against};
pub use types::{EffectivenessResult, TypeDefinition, TypeRelations};

// Re-export the wire record the domain types convert from
pub use typedex_protocol::TypeRecord;
