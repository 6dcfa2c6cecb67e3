use std::fmt;

use super::{argmax, normalized, SpatialMethod, Values};
use crate::{ElectionError, Electorate};

/// Ranked choice voting. Each voter ranks every candidate by distance, and the
/// candidate with the fewest first choices is eliminated until someone holds a
/// majority.
///
/// When several candidates share the fewest first choices, the one with the
/// lowest index is eliminated.
#[derive(Debug, Clone)]
pub struct InstantRunoff {
    rounds: Vec<Vec<f64>>,
    eliminated: Vec<usize>,
    winner: usize,
}

impl SpatialMethod for InstantRunoff {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        let distances = electorate.distances();
        let candidates = distances.candidates();
        let voters = distances.voters();
        let ranks = distances.ranks();
        let weights = electorate.voters();
        let majority = electorate.total_weight() / 2.0;

        let mut qualified: Vec<usize> = (0..candidates).collect();
        let mut eliminated: Vec<usize> = Vec::with_capacity(candidates);
        let mut rounds = Vec::new();
        loop {
            // Every voter's highest ranked candidate still in the race
            let mut tallies = vec![0.0; candidates];
            for v in 0..voters {
                let choice = qualified.iter().copied().min_by_key(|&c| ranks[c * voters + v]);
                if let Some(c) = choice {
                    tallies[c] += weights[v].weight;
                }
            }
            tracing::trace!(round = rounds.len(), ?tallies, "instant runoff round");

            let leader = argmax(&tallies);
            let decided = tallies[leader] > majority || qualified.len() == 1;
            rounds.push(tallies);
            if decided {
                tracing::debug!(
                    winner = leader,
                    rounds = rounds.len(),
                    "instant runoff count finished"
                );
                return Ok(InstantRunoff { rounds, eliminated, winner: leader });
            }

            let last = &rounds[rounds.len() - 1];
            let mut loser = 0;
            for (i, &c) in qualified.iter().enumerate() {
                if last[c] < last[qualified[loser]] {
                    loser = i;
                }
            }
            let loser = qualified.remove(loser);
            tracing::debug!(
                round = rounds.len(),
                eliminated = loser,
                tally = last[loser],
                "candidate eliminated"
            );
            eliminated.push(loser);
        }
    }

    fn winner(&self) -> usize {
        self.winner
    }
}

impl InstantRunoff {
    /// Summed voter weight for each candidate, one entry per round.
    pub fn rounds(&self) -> &[Vec<f64>] {
        &self.rounds
    }

    /// Candidates in the order they were eliminated.
    pub fn eliminated(&self) -> &[usize] {
        &self.eliminated
    }
}

impl fmt::Display for InstantRunoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, round) in self.rounds.iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "Tallies: {}", Values(&normalized(round)))?;
        }
        Ok(())
    }
}
