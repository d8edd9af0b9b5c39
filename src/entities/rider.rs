// 🚵 Rider Entity - deduplicated by (full name, nation)

use crate::identity::stable_id;
use serde::{Deserialize, Serialize};

/// A rider. Dedup key is (full name, nation): two homonyms under different
/// nations are two riders, and a rider whose nation is sometimes blank gets
/// a separate identity for the blank variant rather than a silent merge.
/// An unknown nation is `None` and renders as SQL NULL, never `''`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rider {
    /// Stable id: `rider_<hash(full name, nation)>`
    pub id: String,

    /// Full name as written in the spreadsheet (trimmed)
    pub full_name: String,

    /// ISO-ish nation text from the source, if present
    pub nation: Option<String>,
}

impl Rider {
    pub fn new(full_name: &str, nation: &str) -> Self {
        let full_name = full_name.trim();
        let nation = nation.trim();

        Rider {
            id: stable_id("rider", &[full_name, nation]),
            full_name: full_name.to_string(),
            nation: if nation.is_empty() {
                None
            } else {
                Some(nation.to_string())
            },
        }
    }

    /// Dedup/sort key for this rider.
    pub fn key(&self) -> (String, String) {
        (
            self.full_name.clone(),
            self.nation.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nation_participates_in_identity() {
        assert_ne!(Rider::new("A", "FR").id, Rider::new("A", "BE").id);
    }

    #[test]
    fn test_blank_nation_is_none() {
        let rider = Rider::new("Jean Dupont", "  ");
        assert_eq!(rider.nation, None);
        // but still a stable identity of its own
        assert_eq!(rider.id, Rider::new("Jean Dupont", "").id);
    }

    #[test]
    fn test_identity_stable_under_whitespace() {
        assert_eq!(Rider::new(" Jean ", "FR").id, Rider::new("Jean", " FR ").id);
    }
}
