use crate::app::dto::RenderRequest;
use crate::app::engine::InspectionEngine;
use anyhow::{Context as _, Result};
use std::path::Path;

pub fn print_summary(engine: &InspectionEngine) -> Result<()> {
    let summary = engine.summary();

    println!("Type Relationship Summary:");
    println!("{}", "=".repeat(60));
    for module in &summary.modules {
        println!(
            "  {}: {} processed, {} skipped, {} malformed",
            module.name, module.processed, module.skipped, module.malformed
        );
    }
    println!("{}", "=".repeat(60));
    println!("  Types: {}", summary.node_count);
    println!("  Edges: {}", summary.edge_count);
    println!("    DerivesFrom: {}", summary.derives_from_count);
    println!("    Implements:  {}", summary.implements_count);

    Ok(())
}

pub fn search_types(engine: &InspectionEngine, pattern: &str, limit: Option<usize>) -> Result<()> {
    println!("Searching for types matching: \"{}\"", pattern);
    println!("{}", "=".repeat(80));
    let result = engine.search(pattern, limit)?;

    println!("Found {} matching type(s):\n", result.total_matches);
    if let Some(lim) = limit.filter(|&lim| result.total_matches > lim) {
        println!("Showing first {}:\n", lim);
    }

    for (i, item) in result.items.iter().enumerate() {
        println!(
            "{}. {} [{} in, {} out]",
            i + 1,
            item.name,
            item.incoming,
            item.outgoing
        );
        println!("   {}", item.id);
        println!();
    }

    Ok(())
}

/// Renders DOT to `output`, or to stdout when no path is given.
pub fn write_dot(engine: &InspectionEngine, req: &RenderRequest, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let count = engine.render_to_path(req, path)?;
            eprintln!("Wrote {} node(s) to {}", count, path.display());
        }
        None => {
            let result = engine.render(req)?;
            print!("{}", result.dot);
            tracing::debug!(
                "rendered {} of {} node(s), {} edge(s)",
                result.visible_node_count,
                result.node_count,
                result.edge_count
            );
        }
    }
    Ok(())
}

/// Prints the neighborhood document of `type_id` as JSON.
pub fn export_document(
    engine: &InspectionEngine,
    type_id: &str,
    cluster_by_namespace: bool,
) -> Result<()> {
    let document = engine.document(type_id, cluster_by_namespace)?;
    let json = serde_json::to_string_pretty(&document.export())
        .context("Failed to serialize analysis document")?;
    println!("{}", json);
    Ok(())
}
