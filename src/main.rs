use anyhow::{bail, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

use roster_seed::{
    build_graph, read_rows, read_table, render, render_updates, EmitMode, JerseyConfig, TeamRef,
    DEFAULT_BASE_URL,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "seed" => run_seed(&args[2..], EmitMode::Upsert),
        "replace" => run_seed(&args[2..], EmitMode::Replace),
        "jerseys" => run_jerseys(&args[2..]),
        _ => {
            usage();
            process::exit(1);
        }
    }
}

fn usage() {
    eprintln!("Usage:");
    eprintln!("  roster-seed seed    <roster.csv>  <out.sql>");
    eprintln!("  roster-seed replace <roster.csv>  <out.sql>");
    eprintln!("  roster-seed jerseys <jerseys.csv> <out.sql> [--by-name] [--base <url>]");
}

fn run_seed(args: &[String], mode: EmitMode) -> Result<()> {
    let (csv_path, out_path) = match args {
        [csv, out] => (Path::new(csv), Path::new(out)),
        _ => {
            usage();
            process::exit(1);
        }
    };

    match mode {
        EmitMode::Upsert => println!("🚴 Roster seed (UPSERT) - safe to re-run"),
        EmitMode::Replace => println!("🚴 Roster seed (REPLACE) - destructive rebuild"),
    }

    println!("\n📂 Loading {}...", csv_path.display());
    let table = read_table(csv_path)?;
    println!("✓ {} data rows", table.records.len());

    let graph = build_graph(&table);
    println!(
        "✓ {} categories | {} teams | {} riders | {} assignments",
        graph.category_count(),
        graph.team_count(),
        graph.rider_count(),
        graph.assignment_count()
    );
    if graph.skipped() > 0 {
        println!("⚠️  Skipped {} rows with missing fields", graph.skipped());
    }

    // Render fully before touching the output file: a failure above leaves
    // nothing partial on disk.
    let sql = render(&graph, mode);
    fs::write(out_path, sql)?;
    println!("\n💾 Wrote {}", out_path.display());

    Ok(())
}

fn run_jerseys(args: &[String]) -> Result<()> {
    let mut csv_path: Option<&str> = None;
    let mut out_path: Option<&str> = None;
    let mut config = JerseyConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--by-name" => config.team_ref = TeamRef::Name,
            "--base" => {
                i += 1;
                match args.get(i) {
                    Some(url) => config.base_url = url.clone(),
                    None => bail!("--base requires a URL"),
                }
            }
            arg if csv_path.is_none() => csv_path = Some(arg),
            arg if out_path.is_none() => out_path = Some(arg),
            arg => bail!("Unexpected argument: {}", arg),
        }
        i += 1;
    }

    let (csv_path, out_path) = match (csv_path, out_path) {
        (Some(c), Some(o)) => (Path::new(c), Path::new(o)),
        _ => {
            usage();
            process::exit(1);
        }
    };

    println!("🎽 Jersey links → teams.jersey_url");
    if config.base_url == DEFAULT_BASE_URL {
        println!("   Base: {} (default)", config.base_url);
    } else {
        println!("   Base: {}", config.base_url);
    }

    println!("\n📂 Loading {}...", csv_path.display());
    let rows = read_rows(csv_path)?;

    let source_name = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| csv_path.display().to_string());

    let script = render_updates(&rows, &source_name, &config)?;
    fs::write(out_path, &script.sql)?;

    println!("✓ Updates: {} | Skipped: {}", script.updated, script.skipped);
    println!("\n💾 Wrote {}", out_path.display());

    Ok(())
}
