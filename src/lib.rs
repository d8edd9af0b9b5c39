// Roster Seed - Core Library
// CSV rosters → deterministic SQL seed/repair scripts

pub mod emitter;
pub mod entities;
pub mod fields;
pub mod graph;
pub mod identity;
pub mod jerseys;
pub mod reader;
pub mod sql;

// Re-export commonly used types
pub use emitter::{render, EmitMode};
pub use entities::{Category, Rider, Team};
pub use fields::{Field, FieldExtractor, RosterRow};
pub use graph::RosterGraph;
pub use identity::stable_id;
pub use jerseys::{render_updates, JerseyConfig, JerseyScript, TeamRef, DEFAULT_BASE_URL};
pub use reader::{read_rows, read_table, Table};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the roster graph from a parsed table: resolve columns once, then
/// feed every record through in file order.
pub fn build_graph(table: &Table) -> RosterGraph {
    let extractor = FieldExtractor::from_headers(&table.headers);

    let mut graph = RosterGraph::new();
    for record in &table.records {
        graph.ingest(&extractor.row(record));
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    #[test]
    fn test_build_graph_end_to_end() {
        let table = Table {
            headers: StringRecord::from(vec!["équipe", "coureur", "nation", "Catégorie"]),
            records: vec![
                StringRecord::from(vec!["Alpha", "Jean Dupont", "FR", "u15"]),
                StringRecord::from(vec!["Beta", "Jean Dupont", "FR", "U15"]),
            ],
        };

        let graph = build_graph(&table);
        assert_eq!(graph.category_count(), 1);
        assert_eq!(graph.team_count(), 2);
        assert_eq!(graph.rider_count(), 1);
        assert_eq!(graph.assignment_count(), 1);
    }
}
