// 🎽 Jersey Linker - maps teams to jersey art URLs as UPDATE statements
// Independent of the roster graph: reads a two-column CSV (team ref, file)
// and patches teams.jersey_url.

use anyhow::{bail, Result};

use crate::fields::normalize_header;
use crate::sql::{lit, Script};

/// Default asset location for jersey images.
pub const DEFAULT_BASE_URL: &str = "https://iudexpanzyr.github.io/QuizCyclisme/jerseys/";

/// Which teams column the CSV references. A configuration choice for the
/// whole file, never inferred per-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRef {
    /// CSV carries stable team ids; match on `teams.id`.
    Id,

    /// CSV carries team names; match on `teams.name`.
    Name,
}

impl TeamRef {
    /// Column used in the WHERE clause.
    pub fn column(self) -> &'static str {
        match self {
            TeamRef::Id => "id",
            TeamRef::Name => "name",
        }
    }

    /// Accepted header spellings for the team column.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            TeamRef::Id => &["teamid", "id"],
            TeamRef::Name => &["name", "team"],
        }
    }
}

/// Jersey transform configuration.
#[derive(Debug, Clone)]
pub struct JerseyConfig {
    pub base_url: String,
    pub team_ref: TeamRef,
}

impl Default for JerseyConfig {
    fn default() -> Self {
        JerseyConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            team_ref: TeamRef::Id,
        }
    }
}

/// Rendered script plus its counters.
#[derive(Debug)]
pub struct JerseyScript {
    pub sql: String,
    pub updated: usize,
    pub skipped: usize,
}

/// Render `UPDATE teams SET jersey_url=...` statements from raw CSV rows.
///
/// The first row is treated as a header when the expected columns can be
/// found in it; otherwise the file is assumed headerless and the first two
/// columns are used positionally (degraded but functional, better than
/// refusing a hand-made two-column file).
pub fn render_updates(
    rows: &[Vec<String>],
    source_name: &str,
    config: &JerseyConfig,
) -> Result<JerseyScript> {
    if rows.is_empty() {
        bail!("jersey CSV is empty: {}", source_name);
    }

    let header: Vec<String> = rows[0].iter().map(|h| normalize_header(h)).collect();
    let find = |aliases: &[&str]| -> Option<usize> {
        aliases
            .iter()
            .find_map(|a| header.iter().position(|h| h == a))
    };

    let (team_idx, file_idx, start_row) =
        match (find(config.team_ref.aliases()), find(&["file"])) {
            (Some(t), Some(f)) => (t, f, 1),
            // Header not recognized: assume no header, first two columns.
            _ => (0, 1, 0),
        };

    let mut script = Script::new();
    script.comment(&format!("Auto-generated from {}", source_name));
    script.comment(&format!("Base: {}", config.base_url));
    script.comment(&format!(
        "Expected columns: {},file (separator can be ',' or ';')",
        config.team_ref.aliases()[0]
    ));
    script.blank();

    let mut updated = 0;
    let mut skipped = 0;

    for row in &rows[start_row..] {
        if row.len() <= team_idx.max(file_idx) {
            skipped += 1;
            continue;
        }

        let team_ref = row[team_idx].trim();
        let file_name = row[file_idx].trim();

        if team_ref.is_empty() || file_name.is_empty() {
            skipped += 1;
            continue;
        }

        let url = resolve_url(&config.base_url, file_name);

        script.stmt(format!(
            "UPDATE teams SET jersey_url={} WHERE {}={};",
            lit(&url),
            config.team_ref.column(),
            lit(team_ref)
        ));
        updated += 1;
    }

    script.blank();
    script.comment(&format!("Rows updated: {}", updated));
    script.comment(&format!("Rows skipped: {}", skipped));

    Ok(JerseyScript {
        sql: script.into_string(),
        updated,
        skipped,
    })
}

/// Absolute URLs pass through verbatim; anything else is joined to the base.
fn resolve_url(base_url: &str, file_name: &str) -> String {
    if file_name.starts_with("http://") || file_name.starts_with("https://") {
        return file_name.to_string();
    }

    let relative = file_name.trim_start_matches('/');
    if base_url.ends_with('/') {
        format!("{}{}", base_url, relative)
    } else {
        format!("{}/{}", base_url, relative)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn config_id() -> JerseyConfig {
        JerseyConfig {
            base_url: "https://assets.test/jerseys/".to_string(),
            team_ref: TeamRef::Id,
        }
    }

    #[test]
    fn test_basic_updates_by_id() {
        let input = rows(&[
            &["teamId", "file"],
            &["team_abc", "alpha.png"],
            &["team_def", "beta.png"],
        ]);
        let out = render_updates(&input, "jerseys.csv", &config_id()).unwrap();

        assert_eq!(out.updated, 2);
        assert_eq!(out.skipped, 0);
        assert!(out.sql.contains(
            "UPDATE teams SET jersey_url='https://assets.test/jerseys/alpha.png' WHERE id='team_abc';"
        ));
    }

    #[test]
    fn test_updates_by_name_escape_quotes() {
        let input = rows(&[&["name", "file"], &["O'Team", "oteam.png"]]);
        let config = JerseyConfig {
            base_url: "https://assets.test/jerseys/".to_string(),
            team_ref: TeamRef::Name,
        };
        let out = render_updates(&input, "jerseys.csv", &config).unwrap();

        assert!(out
            .sql
            .contains("WHERE name='O''Team';"));
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let input = rows(&[
            &["teamId", "file"],
            &["team_abc", "https://elsewhere.example/j.png"],
        ]);
        let out = render_updates(&input, "jerseys.csv", &config_id()).unwrap();

        assert!(out
            .sql
            .contains("jersey_url='https://elsewhere.example/j.png'"));
    }

    #[test]
    fn test_leading_slash_is_stripped_before_join() {
        let input = rows(&[&["teamId", "file"], &["team_abc", "/alpha.png"]]);
        let out = render_updates(&input, "jerseys.csv", &config_id()).unwrap();

        assert!(out
            .sql
            .contains("'https://assets.test/jerseys/alpha.png'"));
    }

    #[test]
    fn test_base_without_trailing_slash() {
        assert_eq!(
            resolve_url("https://assets.test/jerseys", "a.png"),
            "https://assets.test/jerseys/a.png"
        );
    }

    #[test]
    fn test_header_detection_is_case_insensitive() {
        let input = rows(&[&["TeamID", "File"], &["team_abc", "a.png"]]);
        let out = render_updates(&input, "jerseys.csv", &config_id()).unwrap();

        assert_eq!(out.updated, 1);
        assert!(out.sql.contains("WHERE id='team_abc';"));
    }

    #[test]
    fn test_positional_fallback_without_header() {
        // No recognizable header: every row is data, columns 0 and 1.
        let input = rows(&[&["team_abc", "a.png"], &["team_def", "b.png"]]);
        let out = render_updates(&input, "jerseys.csv", &config_id()).unwrap();

        assert_eq!(out.updated, 2);
        assert!(out.sql.contains("WHERE id='team_abc';"));
    }

    #[test]
    fn test_empty_fields_and_short_rows_are_skipped() {
        let input = rows(&[
            &["teamId", "file"],
            &["", "a.png"],
            &["team_abc", ""],
            &["only-one-cell"],
            &["team_def", "b.png"],
        ]);
        let out = render_updates(&input, "jerseys.csv", &config_id()).unwrap();

        assert_eq!(out.updated, 1);
        assert_eq!(out.skipped, 3);
        assert!(out.sql.contains("-- Rows updated: 1"));
        assert!(out.sql.contains("-- Rows skipped: 3"));
    }

    #[test]
    fn test_empty_csv_is_fatal() {
        assert!(render_updates(&[], "jerseys.csv", &config_id()).is_err());
    }
}
