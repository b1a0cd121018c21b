use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::rules::{CONSTANTS_IMPORT, CONSTANTS_IMPORT_MARKER, CONSTANTS_SYMBOL};

/// What `ensure_import` did to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// File never references the constants
    NotNeeded,

    /// Constants module already imported
    AlreadyPresent,

    /// Import line inserted after the last import statement
    Inserted,

    /// References present but no import line to anchor on; content unchanged
    NoAnchor,
}

// Recognizes a single-line import statement. Deliberately a line heuristic,
// not a parser: it can miss imports split across lines or quoted unusually.
fn import_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^import.*from.*["'];?$"#).expect("import line pattern is valid")
    })
}

/// Insert the API_URLS import after the last import statement, if the content
/// references the constants and does not import them yet.
///
/// Splits and joins on `\n` exactly, so the file's trailing-newline shape
/// survives the insertion.
pub fn ensure_import(content: &str) -> (String, ImportOutcome) {
    if !content.contains(CONSTANTS_SYMBOL) {
        return (content.to_string(), ImportOutcome::NotNeeded);
    }
    if content.contains(CONSTANTS_IMPORT_MARKER) {
        return (content.to_string(), ImportOutcome::AlreadyPresent);
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let last_import = lines
        .iter()
        .rposition(|line| import_line_pattern().is_match(line.trim()));

    match last_import {
        Some(index) => {
            let mut lines: Vec<String> = lines.into_iter().map(str::to_string).collect();
            lines.insert(index + 1, CONSTANTS_IMPORT.to_string());
            debug!("inserted constants import at line {}", index + 2);
            (lines.join("\n"), ImportOutcome::Inserted)
        }
        None => (content.to_string(), ImportOutcome::NoAnchor),
    }
}
