use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::RenderConfig;
use context_grid_clause::parse_with_report;
use context_grid_lattice::{LatticeBuilder, NodeKind};
use render::OutputFormat;
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod config;
mod render;

#[derive(Parser)]
#[command(name = "context-grid")]
#[command(about = "Build the context grid lattice of an axis clause", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an axis clause and print its axes as JSON
    Parse(InputArgs),

    /// Build the lattice and render it
    Build(BuildArgs),

    /// Print node and edge counts of the lattice
    Check(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// File holding the axis clause ("-" or absent reads stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct BuildArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// TOML file with renderer styles
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Parse(args) => run_parse(&args),
        Commands::Build(args) => run_build(&args),
        Commands::Check(args) => run_check(&args),
    }
}

fn read_clause(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read axis clause {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read axis clause from stdin")?;
            Ok(buf)
        }
    }
}

fn run_parse(args: &InputArgs) -> Result<()> {
    let text = read_clause(args.input.as_deref())?;
    let report = parse_with_report(&text);
    if !report.skipped.is_empty() {
        log::info!("Ignored {} clause line(s)", report.skipped.len());
    }

    let output = json!({
        "status": "ok",
        "axes": report.spec,
        "skipped": report.skipped,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_build(args: &BuildArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let text = read_clause(args.input.input.as_deref())?;
    let spec = parse_with_report(&text).spec;
    let graph = LatticeBuilder::new().build(&spec);
    if graph.is_none() {
        log::warn!("Axis clause declares no rows or columns; nothing to render");
    }

    let rendered = render::render(graph.as_ref(), args.format, &config)?;
    if !rendered.is_empty() {
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn run_check(args: &InputArgs) -> Result<()> {
    let text = read_clause(args.input.as_deref())?;
    let spec = parse_with_report(&text).spec;

    match LatticeBuilder::new().build(&spec) {
        Some(graph) => {
            let (rows, columns) = graph.dimensions();
            println!("rows: {rows}");
            println!("columns: {columns}");
            println!("nodes: {}", graph.node_count());
            println!("edges: {}", graph.edge_count());
            println!(
                "intersections: {}",
                graph.nodes_of_kind(NodeKind::Intersection).count()
            );
        }
        None => println!("empty"),
    }
    Ok(())
}
