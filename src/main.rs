//! Reads `<lines> <iterations>` followed by `from to` pairs on stdin and
//! prints one `node rank` line per node in identifier order.

use anyhow::Context;
use linkrank::{rank_list, EdgeList, RankFormat};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the ranking.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let list = EdgeList::from_reader(std::io::stdin().lock()).context("failed to read edge list from stdin")?;

    let output = rank_list(&list, RankFormat::Truncated)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
