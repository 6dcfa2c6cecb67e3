//! Candidates, voters and the distances between them.
//!
//! Every method starts from a [`DistanceMatrix`] built from a validated
//! [`Electorate`]. The matrix is stored flat, one row per candidate, so that
//! `distances[i * voters + v]` is the distance from candidate `i` to voter
//! `v`.

use crate::{ElectionError, Vector};

/// A candidate standing at a point in the issue space.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Candidate {
    pub x: f64,
    pub y: f64,
}

impl Candidate {
    pub const fn new(x: f64, y: f64) -> Self {
        Candidate { x, y }
    }

    pub const fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// A voter at a point in the issue space. `weight` is how many votes the
/// voter stands for.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Voter {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

impl Voter {
    pub const fn new(x: f64, y: f64, weight: f64) -> Self {
        Voter { x, y, weight }
    }

    pub const fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// A checked snapshot of the candidates and voters of one election.
///
/// There is at least one candidate and one voter, every position is finite,
/// every weight is finite and non-negative, and the total weight is positive.
#[derive(Debug, Clone, Copy)]
pub struct Electorate<'a> {
    candidates: &'a [Candidate],
    voters: &'a [Voter],
    total_weight: f64,
}

impl<'a> Electorate<'a> {
    pub fn new(candidates: &'a [Candidate], voters: &'a [Voter]) -> Result<Self, ElectionError> {
        if candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }
        if voters.is_empty() {
            return Err(ElectionError::NoVoters);
        }
        if let Some(i) = candidates.iter().position(|c| !c.position().is_finite()) {
            return Err(ElectionError::InvalidCandidate(i));
        }
        let mut total_weight = 0.0;
        for (i, v) in voters.iter().enumerate() {
            if !v.position().is_finite() || !v.weight.is_finite() || v.weight < 0.0 {
                return Err(ElectionError::InvalidVoter { voter: i, weight: v.weight });
            }
            total_weight += v.weight;
        }
        if !(total_weight > 0.0 && total_weight.is_finite()) {
            return Err(ElectionError::NonPositiveWeight(total_weight));
        }
        Ok(Electorate { candidates, voters, total_weight })
    }

    pub fn candidates(&self) -> &'a [Candidate] {
        self.candidates
    }

    pub fn voters(&self) -> &'a [Voter] {
        self.voters
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn distances(&self) -> DistanceMatrix {
        DistanceMatrix::new(self.candidates, self.voters)
    }
}

/// Distances from every candidate to every voter.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    distances: Vec<f64>,
    candidates: usize,
    voters: usize,
}

impl DistanceMatrix {
    /// Callers must pass at least one voter, [`Electorate::distances`] is the
    /// checked way in.
    pub(crate) fn new(candidates: &[Candidate], voters: &[Voter]) -> Self {
        let mut distances = Vec::with_capacity(candidates.len() * voters.len());
        for c in candidates {
            let c = c.position();
            distances.extend(voters.iter().map(|v| c.dist(&v.position())));
        }
        DistanceMatrix { distances, candidates: candidates.len(), voters: voters.len() }
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn voters(&self) -> usize {
        self.voters
    }

    /// Distance from candidate `c` to voter `v`.
    pub fn get(&self, c: usize, v: usize) -> f64 {
        debug_assert!(c < self.candidates && v < self.voters);
        self.distances[c * self.voters + v]
    }

    /// Distances from voter `v` to every candidate, in candidate order.
    pub fn column(&self, v: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(v < self.voters);
        self.distances.iter().skip(v).step_by(self.voters).copied()
    }

    /// The eligible candidate nearest to voter `v`. Equal distances go to the
    /// lowest candidate index. Returns `None` if no candidate is eligible.
    pub fn nearest(&self, v: usize, eligible: &[bool]) -> Option<usize> {
        debug_assert!(eligible.len() == self.candidates);
        let mut best: Option<(usize, f64)> = None;
        for (c, d) in self.column(v).enumerate() {
            if !eligible[c] {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }

    /// Every voter's full ranking of the candidates, rank 0 being the
    /// nearest.
    ///
    /// The result has the same layout as the distances, so `ranks[c * voters +
    /// v]` is the rank voter `v` gives candidate `c`. Candidates at the same
    /// distance get distinct ranks, the lower index ranked first.
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.distances.len()];
        let mut order: Vec<usize> = Vec::with_capacity(self.candidates);
        for v in 0..self.voters {
            order.clear();
            order.extend(0..self.candidates);
            // Stable, so ties keep candidate order
            order.sort_by(|&a, &b| self.get(a, v).total_cmp(&self.get(b, v)));
            for (rank, &c) in order.iter().enumerate() {
                ranks[c * self.voters + v] = rank;
            }
        }
        ranks
    }
}
