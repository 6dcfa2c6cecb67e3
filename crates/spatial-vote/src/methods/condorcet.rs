use std::fmt;

use super::{argmax, SpatialMethod};
use crate::{ElectionError, Electorate};

/// Pairwise majority comparisons between every pair of candidates.
///
/// The winner is the Condorcet winner if there is one: a candidate that beats
/// or ties every other candidate. Otherwise it's the candidate which beats or
/// ties the most other candidates. That fallback is a rough stand-in, it's not
/// Copeland, Schulze or minimax, and callers who need one of those have to
/// compute it from [`Condorcet::margin`].
#[derive(Debug, Clone)]
pub struct Condorcet {
    // `margins[i * candidates + j]` is the net share of the total weight, in
    // percent, that prefers `i` to `j`
    margins: Vec<f64>,
    candidates: usize,
    condorcet_winner: Option<usize>,
    winner: usize,
}

impl SpatialMethod for Condorcet {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        let distances = electorate.distances();
        let n = distances.candidates();
        let weights = electorate.voters();
        let total = electorate.total_weight();

        let mut margins = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let mut prefer_i = 0.0;
                let mut prefer_j = 0.0;
                for (v, voter) in weights.iter().enumerate() {
                    let di = distances.get(i, v);
                    let dj = distances.get(j, v);
                    if di < dj {
                        prefer_i += voter.weight;
                    } else if dj < di {
                        prefer_j += voter.weight;
                    }
                }
                let margin = (prefer_i - prefer_j) / total * 100.0;
                margins[i * n + j] = margin;
                // Subtracting keeps a tie at +0.0
                margins[j * n + i] = 0.0 - margin;
            }
        }

        let non_negative: Vec<f64> = (0..n)
            .map(|i| margins[i * n..(i + 1) * n].iter().filter(|&&m| m >= 0.0).count() as f64)
            .collect();
        let condorcet_winner = (0..n).find(|&i| non_negative[i] as usize == n);
        let winner = argmax(&non_negative);
        match condorcet_winner {
            Some(w) => tracing::debug!(winner = w, "condorcet winner found"),
            None => {
                tracing::debug!(winner, "no condorcet winner, picked most non-negative margins")
            }
        }
        Ok(Condorcet { margins, candidates: n, condorcet_winner, winner })
    }

    fn winner(&self) -> usize {
        self.winner
    }
}

impl Condorcet {
    /// Net percentage of the total weight preferring `i` over `j`. Negative if
    /// more voters prefer `j`.
    pub fn margin(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.candidates && j < self.candidates);
        self.margins[i * self.candidates + j]
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// The candidate beating or tying everyone else, if there is one. When
    /// several do, the lowest index.
    pub fn condorcet_winner(&self) -> Option<usize> {
        self.condorcet_winner
    }
}

impl fmt::Display for Condorcet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Preferences:")?;
        for row in self.margins.chunks_exact(self.candidates) {
            write!(f, "\n[")?;
            for m in row {
                write!(f, " {m:8.3}")?;
            }
            write!(f, " ]")?;
        }
        if self.condorcet_winner.is_none() {
            write!(f, "\nThere is no Condorcet winner.")?;
        }
        Ok(())
    }
}
