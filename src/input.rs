//! Edge-list text input
//!
//! Whitespace-separated tokens: a line count and an iteration count, then
//! that many `from to` identifier pairs. Tokens after the declared pairs are
//! ignored.

use crate::graph::GraphStore;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading an edge list
#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing {0} in header")]
    MissingHeader(&'static str),

    #[error("invalid {field} '{value}': expected a non-negative integer")]
    InvalidCount { field: &'static str, value: String },

    #[error("edge list declares {expected} lines but only {found} complete pairs were given")]
    TruncatedEdgeList { expected: usize, found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;

/// A parsed edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Propagation rounds requested by the header
    pub iterations: usize,
    /// `(from, to)` pairs in input order
    pub edges: Vec<(String, String)>,
}

impl EdgeList {
    pub fn parse(text: &str) -> InputResult<Self> {
        let mut tokens = text.split_whitespace();

        let line_count = parse_count(tokens.next(), "line count")?;
        let iterations = parse_count(tokens.next(), "iteration count")?;

        // The header count is untrusted input
        let mut edges = Vec::with_capacity(line_count.min(1024));
        for _ in 0..line_count {
            match (tokens.next(), tokens.next()) {
                (Some(from), Some(to)) => edges.push((from.to_string(), to.to_string())),
                _ => {
                    return Err(InputError::TruncatedEdgeList {
                        expected: line_count,
                        found: edges.len(),
                    })
                }
            }
        }

        debug!("Parsed {} edges, {} iterations", edges.len(), iterations);
        Ok(Self { iterations, edges })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> InputResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Build a graph from the edges, in input order
    pub fn to_graph(&self) -> GraphStore {
        self.edges
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect()
    }
}

impl FromStr for EdgeList {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_count(token: Option<&str>, field: &'static str) -> InputResult<usize> {
    let token = token.ok_or(InputError::MissingHeader(field))?;
    token.parse().map_err(|_| InputError::InvalidCount {
        field,
        value: token.to_string(),
    })
}
