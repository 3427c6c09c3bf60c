//! Result formatting
//!
//! Renders a [`RankTable`] as one `"<identifier> <rank>"` line per node,
//! sorted by identifier, with exactly two digits after the decimal point.

use crate::algo::RankTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a rank is cut down to two decimal digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankFormat {
    /// Render with six fractional digits, then keep the first two
    #[default]
    #[serde(alias = "truncate")]
    Truncated,
    /// Two-digit fixed precision (`{:.2}`)
    #[serde(alias = "round")]
    Rounded,
}

impl RankFormat {
    pub fn render(self, rank: f64) -> String {
        match self {
            RankFormat::Rounded => format!("{:.2}", rank),
            RankFormat::Truncated => {
                let fixed = format!("{:.6}", rank);
                match fixed.find('.') {
                    Some(dot) => fixed[..dot + 3].to_string(),
                    // inf / NaN carry no decimal point
                    None => fixed,
                }
            }
        }
    }
}

impl fmt::Display for RankFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankFormat::Truncated => write!(f, "truncated"),
            RankFormat::Rounded => write!(f, "rounded"),
        }
    }
}

impl FromStr for RankFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" | "truncated" => Ok(RankFormat::Truncated),
            "round" | "rounded" => Ok(RankFormat::Rounded),
            other => Err(format!("unknown rank format '{}'", other)),
        }
    }
}

/// One rendered output line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub node: String,
    /// Two-decimal rendering
    pub rank: String,
    /// Unrounded score
    pub score: f64,
}

impl fmt::Display for RankRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.node, self.rank)
    }
}

/// Sorted, rendered rows for a rank table
pub fn format_rows(table: &RankTable, mode: RankFormat) -> Vec<RankRow> {
    table
        .sorted()
        .into_iter()
        .map(|(id, score)| RankRow {
            node: id.as_str().to_string(),
            rank: mode.render(score),
            score,
        })
        .collect()
}

/// Newline-joined output lines, no trailing newline
pub fn format_ranks(table: &RankTable, mode: RankFormat) -> String {
    format_rows(table, mode)
        .iter()
        .map(RankRow::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
