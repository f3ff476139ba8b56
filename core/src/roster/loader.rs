//! Roster loading from TOML

use std::fs;
use std::path::{Path, PathBuf};

use turngate_types::RosterConfig;

use super::RosterError;

/// Built-in roster used when the host is given none.
pub const DEMO_ROSTER: &str = include_str!("demo.toml");

/// Load and validate a roster from a TOML file.
pub fn load_roster_from_file(path: &Path) -> Result<RosterConfig, RosterError> {
    let content = fs::read_to_string(path).map_err(|source| RosterError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_roster_at(&content, path)
}

/// Parse and validate a roster from TOML text.
pub fn parse_roster(content: &str) -> Result<RosterConfig, RosterError> {
    parse_roster_at(content, Path::new("<inline>"))
}

/// The built-in roster.
pub fn demo_roster() -> Result<RosterConfig, RosterError> {
    parse_roster_at(DEMO_ROSTER, Path::new("<demo>"))
}

fn parse_roster_at(content: &str, path: &Path) -> Result<RosterConfig, RosterError> {
    let roster: RosterConfig =
        toml::from_str(content).map_err(|source| RosterError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&roster, path)?;
    Ok(roster)
}

fn validate(roster: &RosterConfig, path: &Path) -> Result<(), RosterError> {
    let invalid = |reason: String| RosterError::InvalidDefinition {
        path: PathBuf::from(path),
        reason,
    };

    if roster.combatants.is_empty() {
        return Err(invalid("roster has no combatants".to_string()));
    }

    for (idx, c) in roster.combatants.iter().enumerate() {
        if c.name.trim().is_empty() {
            return Err(invalid(format!("combatant #{} has an empty name", idx + 1)));
        }
        if !(c.fill_time_secs.is_finite() && c.fill_time_secs > 0.0) {
            tracing::warn!(
                combatant = %c.name,
                fill_time_secs = c.fill_time_secs,
                "non-positive fill time, timer will stay dormant"
            );
        }
    }

    if !roster.combatants.iter().any(|c| !c.enemy) {
        tracing::warn!(path = %path.display(), "roster has no player combatants");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_roster_loads() {
        let roster = demo_roster().unwrap();
        assert_eq!(roster.combatants.len(), 4);
        assert_eq!(roster.gate.reset_delay_secs, 0.5);
        assert!(roster.combatants[3].enemy);
        assert_eq!(roster.combatants[2].room, 1);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = parse_roster("[gate]\nreset_delay_secs = 1.0\n").unwrap_err();
        assert!(matches!(err, RosterError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = parse_roster("[[combatant]]\nname = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_dormant_fill_time_accepted() {
        let roster = parse_roster("[[combatant]]\nname = \"Statue\"\nfill_time_secs = 0.0\n")
            .unwrap();
        assert_eq!(roster.combatants[0].fill_time_secs, 0.0);
    }

    #[test]
    fn test_bad_toml_reports_parse_error() {
        let err = parse_roster("[[combatant]\nname = 1").unwrap_err();
        assert!(matches!(err, RosterError::ParseToml { .. }));
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let path = std::env::temp_dir().join("turngate-missing-roster.toml");
        let err = load_roster_from_file(&path).unwrap_err();
        assert!(matches!(err, RosterError::ReadFile { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("turngate-roster-{}.toml", std::process::id()));
        fs::write(&path, DEMO_ROSTER).unwrap();
        let roster = load_roster_from_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(roster.combatants[0].name, "Knight");
    }
}
