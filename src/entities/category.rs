// 🏷️ Category Entity - age/level bracket of the competition (U15, U17, ...)

use crate::identity::stable_id;
use serde::{Deserialize, Serialize};

/// A competition category. The code doubles as the display name; it is the
/// uppercased, trimmed form of whatever the spreadsheet said ("u15" → "U15"),
/// so spelling variants collapse to one category and one id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable id: `cat_<hash(code)>`
    pub id: String,

    /// Normalized category code, e.g. "U15"
    pub code: String,

    /// Display name (same as code in the source data)
    pub name: String,
}

impl Category {
    /// Build a category from raw spreadsheet text.
    pub fn from_raw(raw: &str) -> Self {
        let code = normalize_code(raw);
        Category {
            id: stable_id("cat", &[&code]),
            name: code.clone(),
            code,
        }
    }
}

/// Uppercased trimmed category code.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_normalized() {
        let cat = Category::from_raw(" u15 ");
        assert_eq!(cat.code, "U15");
        assert_eq!(cat.name, "U15");
    }

    #[test]
    fn test_variants_share_identity() {
        assert_eq!(Category::from_raw("u15").id, Category::from_raw("U15 ").id);
        assert_ne!(Category::from_raw("U15").id, Category::from_raw("U17").id);
    }
}
