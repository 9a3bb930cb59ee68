use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typeviz::app::dto::{DanglingFilter, RenderRequest};
use typeviz::app::engine::InspectionEngine;
use typeviz::cli;
use typeviz::domain::analyzer::AnalyzerOptions;

#[derive(Parser)]
#[command(name = "tvtool")]
#[command(about = "Inspect type hierarchies and render them as Graphviz DOT", version)]
struct Cli {
    /// Type fact catalog (JSON)
    facts: PathBuf,

    /// Skip standard library types
    #[arg(long, global = true)]
    ignore_std: bool,

    /// Namespace treated as the standard library
    #[arg(long, global = true, default_value = "System")]
    std_namespace: String,

    /// Skip types whose namespace matches this regex
    #[arg(long, global = true)]
    exclude: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print node and edge counts per module
    Summary,
    /// Find types whose id contains a pattern (case-insensitive)
    Search {
        pattern: String,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Render the ancestor neighborhood of one type as DOT
    Dot {
        type_id: String,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render the whole relationship graph as DOT
    Graph {
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Print the neighborhood document of one type as JSON
    Export {
        type_id: String,
        /// Group types into one cluster per namespace
        #[arg(long)]
        cluster_by_namespace: bool,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Group types into one cluster per namespace
    #[arg(long)]
    cluster_by_namespace: bool,
    /// Hide nodes without visible edges
    #[arg(long, value_enum, default_value = "none")]
    drop_dangling: DanglingFilter,
    /// Leave out colors
    #[arg(long)]
    ignore_style: bool,
    /// Emit fast layout hints above this many visible nodes
    #[arg(long)]
    fast_limit: Option<usize>,
}

impl RenderArgs {
    fn request(&self, type_id: Option<String>) -> RenderRequest {
        RenderRequest {
            type_id,
            cluster_by_namespace: self.cluster_by_namespace,
            drop_dangling: self.drop_dangling,
            ignore_style: self.ignore_style,
            fast_rendering_limit: self.fast_limit,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exclude = cli
        .exclude
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("Invalid --exclude pattern")?;
    let options = AnalyzerOptions {
        ignore_std_types: cli.ignore_std,
        std_namespace: cli.std_namespace,
        exclude,
        ..AnalyzerOptions::default()
    };

    let engine = InspectionEngine::load_from_json(&cli.facts, options)?;

    match cli.command {
        Commands::Summary => cli::print_summary(&engine)?,
        Commands::Search { pattern, limit } => cli::search_types(&engine, &pattern, limit)?,
        Commands::Dot { type_id, render } => {
            let req = render.request(Some(type_id));
            cli::write_dot(&engine, &req, render.output.as_deref())?;
        }
        Commands::Graph { render } => {
            let req = render.request(None);
            cli::write_dot(&engine, &req, render.output.as_deref())?;
        }
        Commands::Export {
            type_id,
            cluster_by_namespace,
        } => cli::export_document(&engine, &type_id, cluster_by_namespace)?,
    }

    Ok(())
}
