//! Strong/weak set aggregation

use std::collections::BTreeSet;

use crate::types::{TypeDefinition, TypeRelations};

/// Union the selected relation lists of every type into a sorted, deduplicated list
fn collect<'a, F>(types: &'a [TypeDefinition], select: F) -> Vec<String>
where
    F: Fn(&'a TypeRelations) -> [&'a [String]; 3],
{
    types
        .iter()
        .flat_map(|t| select(&t.relations))
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Get every type the combination has an advantage over.
///
/// Offensive: types hit for double damage. Defensive: types whose attacks
/// are resisted or have no effect.
pub fn strong_against(types: &[TypeDefinition]) -> Vec<String> {
    collect(types, |r| {
        [
            r.double_damage_to.as_slice(),
            r.no_damage_from.as_slice(),
            r.half_damage_from.as_slice(),
        ]
    })
}

/// Get every type the combination is at a disadvantage against.
///
/// Offensive: types that resist or are immune to our attacks. Defensive:
/// types whose attacks hit for double damage.
pub fn weak_against(types: &[TypeDefinition]) -> Vec<String> {
    collect(types, |r| {
        [
            r.no_damage_to.as_slice(),
            r.half_damage_to.as_slice(),
            r.double_damage_from.as_slice(),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(name: &str, relations: TypeRelations) -> Vec<TypeDefinition> {
        vec![TypeDefinition::new(name, relations)]
    }

    #[test]
    fn test_strong_against_double_damage_to() {
        let electric = single(
            "electric",
            TypeRelations::default().with_double_damage_to(["water", "flying"]),
        );

        assert_eq!(strong_against(&electric), vec!["flying", "water"]);
    }

    #[test]
    fn test_strong_against_no_damage_from() {
        let ghost = single(
            "ghost",
            TypeRelations::default().with_no_damage_from(["normal", "fighting"]),
        );

        assert_eq!(strong_against(&ghost), vec!["fighting", "normal"]);
    }

    #[test]
    fn test_strong_against_half_damage_from() {
        let steel = single(
            "steel",
            TypeRelations::default().with_half_damage_from(["grass", "ice"]),
        );

        assert_eq!(strong_against(&steel), vec!["grass", "ice"]);
    }

    #[test]
    fn test_weak_against_no_damage_to() {
        let normal = single(
            "normal",
            TypeRelations::default().with_no_damage_to(["ghost"]),
        );

        assert_eq!(weak_against(&normal), vec!["ghost"]);
    }

    #[test]
    fn test_weak_against_half_damage_to() {
        let fire = single(
            "fire",
            TypeRelations::default().with_half_damage_to(["water", "rock"]),
        );

        assert_eq!(weak_against(&fire), vec!["rock", "water"]);
    }

    #[test]
    fn test_weak_against_double_damage_from() {
        let grass = single(
            "grass",
            TypeRelations::default().with_double_damage_from(["fire", "ice"]),
        );

        assert_eq!(weak_against(&grass), vec!["fire", "ice"]);
    }

    #[test]
    fn test_sets_ignore_the_other_relations() {
        // Relations feeding the weak set never leak into the strong set and vice versa
        let relations = TypeRelations::default()
            .with_half_damage_to(["steel"])
            .with_no_damage_to(["fairy"])
            .with_double_damage_from(["psychic"]);
        let poison = single("poison", relations);

        assert!(strong_against(&poison).is_empty());

        let relations = TypeRelations::default()
            .with_double_damage_to(["grass"])
            .with_half_damage_from(["bug"])
            .with_no_damage_from(["ghost"]);
        let normalish = single("normalish", relations);

        assert!(weak_against(&normalish).is_empty());
    }

    #[test]
    fn test_multiple_types_combine() {
        let types = vec![
            TypeDefinition::new("a", TypeRelations::default().with_double_damage_to(["water"])),
            TypeDefinition::new("b", TypeRelations::default().with_double_damage_to(["grass"])),
        ];

        assert_eq!(strong_against(&types), vec!["grass", "water"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let types = vec![
            TypeDefinition::new("a", TypeRelations::default().with_double_damage_to(["water"])),
            TypeDefinition::new("b", TypeRelations::default().with_double_damage_to(["water"])),
        ];

        assert_eq!(strong_against(&types), vec!["water"]);
    }

    #[test]
    fn test_duplicates_collapse_across_relations() {
        // Water resists fire and hits it for double damage
        let water = single(
            "water",
            TypeRelations::default()
                .with_double_damage_to(["fire", "ground", "rock", "fire"])
                .with_half_damage_from(["fire", "water", "ice", "steel"]),
        );

        assert_eq!(
            strong_against(&water),
            vec!["fire", "ground", "ice", "rock", "steel", "water"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(strong_against(&[]).is_empty());
        assert!(weak_against(&[]).is_empty());
    }

    #[test]
    fn test_empty_relations_contribute_nothing() {
        let types = vec![
            TypeDefinition::new("stellar", TypeRelations::default()),
            TypeDefinition::new("ice", TypeRelations::default().with_double_damage_from(["fire"])),
        ];

        assert!(strong_against(&types).is_empty());
        assert_eq!(weak_against(&types), vec!["fire"]);
    }

    #[test]
    fn test_order_independent() {
        let ground = TypeDefinition::new(
            "ground",
            TypeRelations::default()
                .with_double_damage_to(["fire", "electric", "poison", "rock", "steel"])
                .with_no_damage_from(["electric"])
                .with_half_damage_from(["poison", "rock"])
                .with_double_damage_from(["water", "grass", "ice"]),
        );
        let flying = TypeDefinition::new(
            "flying",
            TypeRelations::default()
                .with_double_damage_to(["grass", "fighting", "bug"])
                .with_half_damage_to(["electric", "rock", "steel"])
                .with_no_damage_from(["ground"])
                .with_double_damage_from(["electric", "ice", "rock"]),
        );
        let shuffled_ground = TypeDefinition::new(
            "ground",
            TypeRelations::default()
                .with_double_damage_to(["steel", "rock", "fire", "poison", "electric"])
                .with_no_damage_from(["electric"])
                .with_half_damage_from(["rock", "poison"])
                .with_double_damage_from(["ice", "grass", "water"]),
        );

        let forward = vec![ground.clone(), flying.clone()];
        let reversed = vec![flying, shuffled_ground];

        assert_eq!(strong_against(&forward), strong_against(&reversed));
        assert_eq!(weak_against(&forward), weak_against(&reversed));
        assert_eq!(
            weak_against(&forward),
            vec!["electric", "grass", "ice", "rock", "steel", "water"]
        );
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let odd = single(
            "odd",
            TypeRelations::default().with_double_damage_to(["water", "Fire", "fire"]),
        );

        // Uppercase sorts before lowercase and is not folded together
        assert_eq!(strong_against(&odd), vec!["Fire", "fire", "water"]);
    }
}
