// 📜 SQL Emitter - renders the entity graph as an upsert or replace script
// Output is fully deterministic: same graph, same bytes. Everything is
// emitted from the graph's sorted accessors, never from raw map iteration.

use crate::graph::RosterGraph;
use crate::sql::{lit, lit_opt, Script};

/// Emission strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// INSERT ... ON CONFLICT DO UPDATE per entity; safe to re-run, never
    /// deletes anything.
    Upsert,

    /// Purge the roster dataset (and the duel subsystem that references it),
    /// then rebuild from the graph. Destructive.
    Replace,
}

/// Duel subsystem tables, leaf-to-root. They hold foreign keys into riders
/// and teams, so a replace must clear them before the roster tables.
const DUEL_TABLES: [&str; 5] = [
    "duel_answers",
    "duel_players",
    "duel_rounds",
    "duel_results",
    "duels",
];

/// Roster tables, leaf-to-root (delete order). Insert order is the reverse.
const ROSTER_TABLES: [&str; 4] = ["rider_team_current", "riders", "teams", "categories"];

/// Render the graph as a SQL script in the given mode.
pub fn render(graph: &RosterGraph, mode: EmitMode) -> String {
    let mut script = Script::new();

    match mode {
        EmitMode::Upsert => {
            script.comment("Generated from CSV. Safe to re-run (UPSERT).");
            script.stmt("PRAGMA foreign_keys=ON;".to_string());
            script.blank();
            // No BEGIN/COMMIT: the D1 executor refuses explicit transactions.
            push_inserts(&mut script, graph, false);
        }
        EmitMode::Replace => {
            script.comment("Generated from CSV. REPLACES the roster dataset (and clears duels).");
            script.stmt("PRAGMA foreign_keys=OFF;".to_string());
            script.blank();

            // Intermediate purge states violate FK constraints, hence the
            // pragma bracket around the delete phase.
            script.comment("Clear duels (safe reset)");
            for table in DUEL_TABLES {
                script.stmt(format!("DELETE FROM {};", table));
            }
            script.blank();

            script.comment("Clear roster dataset");
            for table in ROSTER_TABLES {
                script.stmt(format!("DELETE FROM {};", table));
            }
            script.blank();

            script.stmt("PRAGMA foreign_keys=ON;".to_string());
            script.blank();
            push_inserts(&mut script, graph, true);
        }
    }

    script.blank();
    script.comment(&format!(
        "Categories: {} | Teams: {} | Riders: {} | Assignments: {}",
        graph.category_count(),
        graph.team_count(),
        graph.rider_count(),
        graph.assignment_count()
    ));
    script.comment(&format!(
        "Rows accepted: {} | Rows skipped: {}",
        graph.accepted(),
        graph.skipped()
    ));

    script.into_string()
}

/// Sorted upsert statements, root-to-leaf: categories, teams, riders,
/// assignments. The ON CONFLICT clause is harmless in replace mode (the
/// tables are empty) and keeps the two modes byte-compatible per statement.
fn push_inserts(script: &mut Script, graph: &RosterGraph, section_comments: bool) {
    if section_comments {
        script.comment("Rebuild categories");
    }
    for cat in graph.sorted_categories() {
        script.stmt(format!(
            "INSERT INTO categories(id, code, name) VALUES({}, {}, {}) \
             ON CONFLICT(id) DO UPDATE SET code=excluded.code, name=excluded.name;",
            lit(&cat.id),
            lit(&cat.code),
            lit(&cat.name)
        ));
    }
    script.blank();

    if section_comments {
        script.comment("Rebuild teams");
    }
    for team in graph.sorted_teams() {
        script.stmt(format!(
            "INSERT INTO teams(id, name, category_id, jersey_url) VALUES({}, {}, {}, NULL) \
             ON CONFLICT(id) DO UPDATE SET name=excluded.name, category_id=excluded.category_id;",
            lit(&team.id),
            lit(&team.name),
            lit(&team.category_id)
        ));
    }
    script.blank();

    if section_comments {
        script.comment("Rebuild riders");
    }
    for rider in graph.sorted_riders() {
        script.stmt(format!(
            "INSERT INTO riders(id, full_name, nation) VALUES({}, {}, {}) \
             ON CONFLICT(id) DO UPDATE SET full_name=excluded.full_name, nation=excluded.nation;",
            lit(&rider.id),
            lit(&rider.full_name),
            lit_opt(rider.nation.as_deref())
        ));
    }
    script.blank();

    if section_comments {
        script.comment("Rebuild rider_team_current");
    }
    for (rider_id, team_id) in graph.sorted_assignments() {
        script.stmt(format!(
            "INSERT INTO rider_team_current(rider_id, team_id) VALUES({}, {}) \
             ON CONFLICT(rider_id) DO UPDATE SET team_id=excluded.team_id;",
            lit(rider_id),
            lit(team_id)
        ));
    }
}

// ============================================================================
// TESTS
// ============================================================================
