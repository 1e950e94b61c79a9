//! Matchup aggregation over resolved type definitions
//!
//! These helpers merge the relation tables of every type a Pokemon has
//! into flat name sets. They do not weigh multipliers against each other:
//! a name lands in a set if any single type lists it under a qualifying
//! relation.

mod effectiveness;

pub use effectiveness::{strong_against, weak_against};
