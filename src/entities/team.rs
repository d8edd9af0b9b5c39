// 👕 Team Entity - unique per (category, name)

use crate::identity::stable_id;
use serde::{Deserialize, Serialize};

/// A team within one category. The same club name entered under two
/// categories is two distinct teams with two distinct ids, which is why the
/// category code participates in the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Stable id: `team_<hash(category code, name)>`
    pub id: String,

    /// Team name as written in the spreadsheet (trimmed)
    pub name: String,

    /// Owning category id (foreign key)
    pub category_id: String,
}

impl Team {
    pub fn new(category_code: &str, name: &str, category_id: &str) -> Self {
        Team {
            id: stable_id("team", &[category_code, name]),
            name: name.trim().to_string(),
            category_id: category_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_two_categories_two_teams() {
        let a = Team::new("U15", "Alpha", "cat_1");
        let b = Team::new("U17", "Alpha", "cat_2");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_identity_stable() {
        assert_eq!(Team::new("U15", "Alpha", "c").id, Team::new("U15", " Alpha ", "c").id);
    }
}
