use std::fmt;

use super::{argmax, SpatialMethod, Values};
use crate::{ElectionError, Electorate};

/// Score voting. Every voter gives their nearest candidate `max_score`, their
/// farthest candidate 0, and everyone in between a score proportional to
/// their distance, rounded half to even. The highest weighted average score
/// wins.
#[derive(Debug, Clone)]
pub struct Score {
    // `ballots[v * candidates + c]` is the score voter `v` gave candidate `c`
    ballots: Vec<u32>,
    candidates: usize,
    max_score: u32,
    scores: Vec<f64>,
    winner: usize,
}

impl Score {
    pub const DEFAULT_MAX: u32 = 10;

    pub fn count_with(electorate: &Electorate, max_score: u32) -> Result<Self, ElectionError> {
        if max_score == 0 {
            return Err(ElectionError::ZeroMaxScore);
        }
        let distances = electorate.distances();
        let n = distances.candidates();
        let mut ballots = Vec::with_capacity(n * distances.voters());
        let mut sums = vec![0.0; n];
        for (v, voter) in electorate.voters().iter().enumerate() {
            let (near, far) = distances
                .column(v)
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)));
            let spread = far - near;
            if spread <= 0.0 {
                return Err(ElectionError::DegenerateGeometry { voter: v });
            }
            for (c, d) in distances.column(v).enumerate() {
                let score = ((far - d) / spread * f64::from(max_score)).round_ties_even();
                // The rescaled value lies in [0, max_score]
                let score = score as u32;
                ballots.push(score);
                sums[c] += voter.weight * f64::from(score);
            }
        }
        let total = electorate.total_weight();
        let scores: Vec<f64> = sums.iter().map(|s| s / total).collect();
        let winner = argmax(&scores);
        tracing::debug!(winner, max_score, "score count finished");
        Ok(Score { ballots, candidates: n, max_score, scores, winner })
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Weighted average score of each candidate.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Scores given by voter `v`, in candidate order.
    pub fn ballot(&self, v: usize) -> &[u32] {
        &self.ballots[v * self.candidates..(v + 1) * self.candidates]
    }
}

impl SpatialMethod for Score {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        Score::count_with(electorate, Score::DEFAULT_MAX)
    }

    fn winner(&self) -> usize {
        self.winner
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scores: {}", Values(&self.scores))
    }
}

/// Approval voting, which is score voting where the only scores are 0 and 1.
#[derive(Debug, Clone)]
pub struct Approval(Score);

impl SpatialMethod for Approval {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        Score::count_with(electorate, 1).map(Approval)
    }

    fn winner(&self) -> usize {
        self.0.winner
    }
}

impl Approval {
    /// Weighted share of voters approving of each candidate.
    pub fn scores(&self) -> &[f64] {
        self.0.scores()
    }

    /// Whether voter `v` approves of each candidate.
    pub fn ballot(&self, v: usize) -> impl Iterator<Item = bool> + '_ {
        self.0.ballot(v).iter().map(|&s| s == 1)
    }
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
