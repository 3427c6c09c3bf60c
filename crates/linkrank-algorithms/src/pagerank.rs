//! PageRank algorithm implementation
//!
//! Fixed-round power iteration without a damping term. A node with no
//! outgoing edges spreads its whole rank evenly over every node in the graph,
//! itself included, so total rank mass is preserved from round to round.

use super::common::GraphView;
use rayon::prelude::*;
use thiserror::Error;

/// Errors raised while ranking
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Uniform initialization divides by the node count
    #[error("cannot rank an empty graph")]
    EmptyGraph,
}

pub type RankResult<T> = Result<T, RankError>;

/// PageRank configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRankConfig {
    /// Number of propagation rounds (0 leaves the uniform initial ranks)
    pub iterations: usize,
    /// Accumulate each round on the rayon thread pool
    pub parallel: bool,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            parallel: false,
        }
    }
}

/// Rank state over a [`GraphView`], advanced one synchronous round at a time.
///
/// Two score buffers are kept; every round writes the complete next snapshot
/// from the previous one and then swaps them.
pub struct PageRank<'a> {
    view: &'a GraphView,
    dangling: Vec<usize>,
    scores: Vec<f64>,
    next_scores: Vec<f64>,
    rounds: usize,
    parallel: bool,
}

impl<'a> PageRank<'a> {
    /// Assign every node the uniform starting rank `1 / N`.
    pub fn initialize(view: &'a GraphView) -> RankResult<Self> {
        let n = view.node_count;
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        let initial_score = 1.0 / n as f64;

        Ok(Self {
            view,
            dangling: view.dangling_nodes().collect(),
            scores: vec![initial_score; n],
            next_scores: vec![0.0; n],
            rounds: 0,
            parallel: false,
        })
    }

    /// Toggle rayon accumulation for subsequent rounds
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run a single propagation round.
    pub fn step(&mut self) {
        let view = self.view;
        let n = view.node_count as f64;
        let scores = &self.scores;

        // Each dangling node hands r / N to every node.
        let dangling_share: f64 = self.dangling.iter().map(|&idx| scores[idx] / n).sum();

        // Pull formulation: every destination is written exactly once, by
        // summing the shares of its predecessors (with multiplicity).
        let incoming = |idx: usize| -> f64 {
            view.predecessors(idx)
                .iter()
                .fold(dangling_share, |acc, &source_idx| {
                    acc + scores[source_idx] / view.out_degree(source_idx) as f64
                })
        };

        if self.parallel {
            self.next_scores
                .par_iter_mut()
                .enumerate()
                .for_each(|(idx, score)| *score = incoming(idx));
        } else {
            for (idx, score) in self.next_scores.iter_mut().enumerate() {
                *score = incoming(idx);
            }
        }

        // Swap buffers
        std::mem::swap(&mut self.scores, &mut self.next_scores);
        self.rounds += 1;
    }

    /// Run `rounds` propagation rounds and return the resulting scores.
    pub fn run(&mut self, rounds: usize) -> &[f64] {
        for _ in 0..rounds {
            self.step();
        }
        &self.scores
    }

    /// Current scores, indexed like the view
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of rounds completed since initialization
    pub fn rounds_completed(&self) -> usize {
        self.rounds
    }

    /// Consume the state, returning the current scores
    pub fn into_scores(self) -> Vec<f64> {
        self.scores
    }
}

/// Calculate PageRank for the graph view
pub fn page_rank(view: &GraphView, config: PageRankConfig) -> RankResult<Vec<f64>> {
    let mut ranker = PageRank::initialize(view)?.parallel(config.parallel);
    ranker.run(config.iterations);
    Ok(ranker.into_scores())
}
