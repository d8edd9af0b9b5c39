// 🕸️ Entity Graph - deduplicated roster entities + current team assignments
// One graph per run, rebuilt from scratch; nothing survives between runs.

use std::collections::HashMap;

use crate::entities::category::normalize_code;
use crate::entities::{Category, Rider, Team};
use crate::fields::RosterRow;

/// Deduplicated roster built from rows in file order.
///
/// Category/Team/Rider sets are order-insensitive (a permutation of the same
/// rows yields the same sets), but the rider → team assignment is
/// last-occurrence-wins, so row order matters there by design.
///
/// Internal maps are hash maps; anything that feeds the SQL emitter goes
/// through the `sorted_*` accessors, never raw iteration.
#[derive(Debug, Default)]
pub struct RosterGraph {
    /// category code → Category
    categories: HashMap<String, Category>,

    /// (category code, team name) → Team
    teams: HashMap<(String, String), Team>,

    /// (full name, nation) → Rider
    riders: HashMap<(String, String), Rider>,

    /// rider id → team id (current assignment, last row wins)
    current_team: HashMap<String, String>,

    accepted: usize,
    skipped: usize,
}

impl RosterGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one extracted row. Returns false (and counts the row as
    /// skipped) when team, rider, or category is missing.
    pub fn ingest(&mut self, row: &RosterRow) -> bool {
        let team_name = row.team.trim();
        let rider_name = row.rider.trim();
        let nation = row.nation.trim();

        if team_name.is_empty() || rider_name.is_empty() || row.category.trim().is_empty() {
            self.skipped += 1;
            return false;
        }

        let cat_code = normalize_code(&row.category);

        let category = self
            .categories
            .entry(cat_code.clone())
            .or_insert_with(|| Category::from_raw(&row.category));
        let category_id = category.id.clone();

        let team = self
            .teams
            .entry((cat_code.clone(), team_name.to_string()))
            .or_insert_with(|| Team::new(&cat_code, team_name, &category_id));
        let team_id = team.id.clone();

        let rider = self
            .riders
            .entry((rider_name.to_string(), nation.to_string()))
            .or_insert_with(|| Rider::new(rider_name, nation));

        // Current team = last occurrence in file order
        self.current_team.insert(rider.id.clone(), team_id);

        self.accepted += 1;
        true
    }

    /// Consume a whole sequence of rows in order.
    pub fn ingest_all<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = RosterRow>,
    {
        for row in rows {
            self.ingest(&row);
        }
    }

    // ========================================================================
    // SORTED ACCESSORS (emission order is part of the contract)
    // ========================================================================

    /// Categories sorted by code.
    pub fn sorted_categories(&self) -> Vec<&Category> {
        let mut cats: Vec<&Category> = self.categories.values().collect();
        cats.sort_by(|a, b| a.code.cmp(&b.code));
        cats
    }

    /// Teams sorted by (category code, team name).
    pub fn sorted_teams(&self) -> Vec<&Team> {
        let mut teams: Vec<(&(String, String), &Team)> = self.teams.iter().collect();
        teams.sort_by(|a, b| a.0.cmp(b.0));
        teams.into_iter().map(|(_, t)| t).collect()
    }

    /// Riders sorted by (full name, nation).
    pub fn sorted_riders(&self) -> Vec<&Rider> {
        let mut riders: Vec<&Rider> = self.riders.values().collect();
        riders.sort_by_key(|r| r.key());
        riders
    }

    /// Assignments sorted by rider id.
    pub fn sorted_assignments(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .current_team
            .iter()
            .map(|(rider_id, team_id)| (rider_id.as_str(), team_id.as_str()))
            .collect();
        pairs.sort();
        pairs
    }

    // ========================================================================
    // COUNTS
    // ========================================================================

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.current_team.len()
    }

    /// Rows that passed the required-field check.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Rows dropped for missing team/rider/category.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

// ============================================================================
// TESTS
// ============================================================================
