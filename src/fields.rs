// 🧭 Field Extraction - tolerant header resolution for roster CSVs
// The same spreadsheet arrives as "équipe", "Equipe" or "team" depending on
// who exported it; columns are resolved once per file, by normalized name.

use csv::StringRecord;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// CANONICAL FIELDS
// ============================================================================

/// Semantic fields of a roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Team,
    Rider,
    Nation,
    Category,
}

impl Field {
    /// Accepted header spellings, checked in order (first match wins).
    /// One declarative table instead of string comparisons scattered
    /// around the ingestion code.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Team => &["equipe", "équipe", "team"],
            Field::Rider => &["coureur", "rider"],
            Field::Nation => &["nation", "nationalité", "country"],
            Field::Category => &["Catégorie", "catégorie", "categorie", "category"],
        }
    }
}

/// Normalize a header cell for comparison: strip a leading BOM (it survives
/// on the first header of UTF-8-sig files), trim, lowercase, fold accents.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

// ============================================================================
// FIELD EXTRACTOR
// ============================================================================

/// One extracted roster row, already trimmed. Empty string = absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub team: String,
    pub rider: String,
    pub nation: String,
    pub category: String,
}

/// Resolves header aliases to column indices once, then extracts trimmed
/// values per record. Pure: no I/O, no state beyond the resolved indices.
#[derive(Debug)]
pub struct FieldExtractor {
    team: Option<usize>,
    rider: Option<usize>,
    nation: Option<usize>,
    category: Option<usize>,
}

impl FieldExtractor {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let resolve = |field: Field| -> Option<usize> {
            for alias in field.aliases() {
                let want = normalize_header(alias);
                if let Some(idx) = normalized.iter().position(|h| *h == want) {
                    return Some(idx);
                }
            }
            None
        };

        FieldExtractor {
            team: resolve(Field::Team),
            rider: resolve(Field::Rider),
            nation: resolve(Field::Nation),
            category: resolve(Field::Category),
        }
    }

    /// Trimmed value of a field, or `""` when the column is missing or the
    /// record is short.
    pub fn extract<'r>(&self, record: &'r StringRecord, field: Field) -> &'r str {
        let idx = match field {
            Field::Team => self.team,
            Field::Rider => self.rider,
            Field::Nation => self.nation,
            Field::Category => self.category,
        };

        idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
    }

    /// Extract all four canonical fields of one record.
    pub fn row(&self, record: &StringRecord) -> RosterRow {
        RosterRow {
            team: self.extract(record, Field::Team).to_string(),
            rider: self.extract(record, Field::Rider).to_string(),
            nation: self.extract(record, Field::Nation).to_string(),
            category: self.extract(record, Field::Category).to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn test_normalize_header_folds_accents_and_case() {
        assert_eq!(normalize_header("Équipe"), "equipe");
        assert_eq!(normalize_header("Catégorie"), "categorie");
        assert_eq!(normalize_header("  Nationalité "), "nationalite");
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}equipe"), "equipe");
    }

    #[test]
    fn test_extract_french_headers() {
        let headers = record(&["équipe", "coureur", "nation", "catégorie"]);
        let ex = FieldExtractor::from_headers(&headers);
        let rec = record(&["Alpha", " Jean Dupont ", "FR", "u15"]);

        assert_eq!(ex.extract(&rec, Field::Team), "Alpha");
        assert_eq!(ex.extract(&rec, Field::Rider), "Jean Dupont");
        assert_eq!(ex.extract(&rec, Field::Nation), "FR");
        assert_eq!(ex.extract(&rec, Field::Category), "u15");
    }

    #[test]
    fn test_extract_english_headers_mixed_case() {
        let headers = record(&["Team", "RIDER", "Country", "Category"]);
        let ex = FieldExtractor::from_headers(&headers);
        let rec = record(&["Beta", "Ana Lima", "PT", "U17"]);

        assert_eq!(ex.extract(&rec, Field::Team), "Beta");
        assert_eq!(ex.extract(&rec, Field::Rider), "Ana Lima");
        assert_eq!(ex.extract(&rec, Field::Nation), "PT");
        assert_eq!(ex.extract(&rec, Field::Category), "U17");
    }

    #[test]
    fn test_bom_on_first_header() {
        let headers = record(&["\u{feff}équipe", "coureur", "catégorie"]);
        let ex = FieldExtractor::from_headers(&headers);
        let rec = record(&["Alpha", "Jean", "U15"]);

        assert_eq!(ex.extract(&rec, Field::Team), "Alpha");
    }

    #[test]
    fn test_missing_column_yields_empty() {
        let headers = record(&["équipe", "coureur", "catégorie"]);
        let ex = FieldExtractor::from_headers(&headers);
        let rec = record(&["Alpha", "Jean", "U15"]);

        assert_eq!(ex.extract(&rec, Field::Nation), "");
    }

    #[test]
    fn test_short_record_yields_empty() {
        let headers = record(&["équipe", "coureur", "nation", "catégorie"]);
        let ex = FieldExtractor::from_headers(&headers);
        let rec = record(&["Alpha", "Jean"]);

        assert_eq!(ex.extract(&rec, Field::Nation), "");
        assert_eq!(ex.extract(&rec, Field::Category), "");
    }

    #[test]
    fn test_row_extracts_all_fields() {
        let headers = record(&["team", "rider", "nation", "category"]);
        let ex = FieldExtractor::from_headers(&headers);
        let row = ex.row(&record(&["Alpha", "Jean Dupont", "FR", "u15"]));

        assert_eq!(
            row,
            RosterRow {
                team: "Alpha".to_string(),
                rider: "Jean Dupont".to_string(),
                nation: "FR".to_string(),
                category: "u15".to_string(),
            }
        );
    }
}
