//! LinkRank CLI — rank the nodes of a directed edge list
//!
//! Reads the `<lines> <iterations>` + `from to` edge-list format from a file
//! or stdin.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use linkrank::{algo, format_rows, EdgeList, GraphStatistics, RankConfig, RankFormat, RankRow};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank for directed edge lists")]
struct Cli {
    /// YAML file with default ranking options
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Rounding {
    /// Cut the six-digit rendering after two digits
    Truncate,
    /// Round to two digits
    Round,
}

impl From<Rounding> for RankFormat {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Truncate => RankFormat::Truncated,
            Rounding::Round => RankFormat::Rounded,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute PageRank for an edge list
    Rank {
        /// Edge list file (stdin when omitted)
        input: Option<PathBuf>,

        /// Propagation rounds, overriding the config file and the input header
        #[arg(long)]
        iterations: Option<usize>,

        /// Two-decimal rendering mode
        #[arg(long)]
        rounding: Option<Rounding>,

        /// Accumulate rounds in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Print graph statistics for an edge list
    Stats {
        /// Edge list file (stdin when omitted)
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Rank { input, iterations, rounding, parallel } => run_rank(
            &cli,
            input.as_deref(),
            *iterations,
            *rounding,
            *parallel,
        ),
        Commands::Stats { input } => run_stats(input.as_deref(), &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn read_edge_list(input: Option<&Path>) -> anyhow::Result<EdgeList> {
    match input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            EdgeList::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
        }
        None => EdgeList::from_reader(std::io::stdin().lock()).context("failed to parse stdin"),
    }
}

fn run_rank(
    cli: &Cli,
    input: Option<&Path>,
    iterations: Option<usize>,
    rounding: Option<Rounding>,
    parallel: bool,
) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::from_yaml_file(path)?,
        None => RankConfig::default(),
    };
    if iterations.is_some() {
        config.iterations = iterations;
    }
    if let Some(rounding) = rounding {
        config.rounding = rounding.into();
    }
    config.parallel |= parallel;

    let list = read_edge_list(input)?;
    let store = list.to_graph();

    let rows = if store.is_empty() {
        info!("Edge list is empty, nothing to rank");
        Vec::new()
    } else {
        let table = algo::rank(&store, config.page_rank_config(list.iterations))?;
        format_rows(&table, config.rounding)
    };

    print_rows(&rows, &cli.format)
}

fn print_rows(rows: &[RankRow], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for row in rows {
                println!("{}", row);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Csv => {
            println!("node,rank");
            for row in rows {
                println!("{},{}", format_csv_value(&row.node), row.rank);
            }
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("(no nodes)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["node", "rank"]);

            for row in rows {
                table.add_row(vec![row.node.clone(), row.rank.clone()]);
            }

            println!("{}", table);
            println!("{} node(s)", rows.len());
        }
    }

    Ok(())
}

fn run_stats(input: Option<&Path>, format: &OutputFormat) -> anyhow::Result<()> {
    let list = read_edge_list(input)?;
    let stats: GraphStatistics = list.to_graph().statistics();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Csv => {
            println!("nodes,edges,dangling,self_loops");
            println!(
                "{},{},{},{}",
                stats.node_count, stats.edge_count, stats.dangling_count, stats.self_loop_count
            );
        }
        _ => {
            println!("Nodes:      {}", stats.node_count);
            println!("Edges:      {}", stats.edge_count);
            println!("Dangling:   {}", stats.dangling_count);
            println!("Self-loops: {}", stats.self_loop_count);
            println!("Iterations: {}", list.iterations);
        }
    }

    Ok(())
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
