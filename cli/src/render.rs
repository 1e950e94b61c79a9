//! Plain-text rendering of lookup outcomes

use std::fmt::Write;

use typedex_client::{CatalogError, Lookup, MatchupReport, format_type_name};

const RULE: &str = "===========================================";

pub fn banner() -> String {
    format!("{RULE}\n   Pokémon Type Effectiveness Checker\n{RULE}")
}

pub fn invalid_name() -> &'static str {
    "Please enter a valid Pokémon name."
}

pub fn goodbye() -> &'static str {
    "Thank you for using Pokémon Type Checker! Goodbye!"
}

/// Render whatever a lookup produced, success or not
pub fn outcome(name: &str, result: &Result<Lookup, CatalogError>) -> String {
    match result {
        Ok(Lookup::Matchup(report)) => report_text(report),
        Ok(Lookup::NoTypeInformation(_)) => no_types().to_string(),
        Err(e) => error_text(name, e),
    }
}

pub fn report_text(report: &MatchupReport) -> String {
    let mut out = String::new();
    let type_names = report
        .types
        .iter()
        .map(|t| format_type_name(&t.name))
        .collect::<Vec<_>>()
        .join(", ");

    // Writing into a String cannot fail
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Pokémon: {}", format_type_name(&report.pokemon.name));
    let _ = writeln!(out, "Type(s): {}", type_names);
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "\n✓ STRONG AGAINST (Offensive & Defensive Advantages):");
    section(&mut out, &report.effectiveness.strong_against);

    let _ = writeln!(out, "\n✗ WEAK AGAINST (Offensive & Defensive Disadvantages):");
    section(&mut out, &report.effectiveness.weak_against);

    let _ = write!(out, "\n{RULE}");
    out
}

fn section(out: &mut String, names: &[String]) {
    if names.is_empty() {
        let _ = writeln!(out, "  - None");
        return;
    }
    for name in names {
        let _ = writeln!(out, "  - {}", format_type_name(name));
    }
}

fn no_types() -> &'static str {
    "❌ Could not retrieve type information for this Pokémon."
}

fn error_text(name: &str, error: &CatalogError) -> String {
    if error.is_not_found() {
        format!("❌ Pokémon '{name}' not found. Please check the spelling and try again.")
    } else {
        format!("❌ Could not reach the catalog: {error}")
    }
}
