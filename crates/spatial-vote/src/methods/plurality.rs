use std::fmt;

use super::{argmax, normalized, plurality_tally, SpatialMethod, Values};
use crate::{ElectionError, Electorate};

/// Every voter votes for their nearest candidate, the most votes wins.
#[derive(Debug, Clone)]
pub struct Plurality {
    tallies: Vec<f64>,
    winner: usize,
}

impl SpatialMethod for Plurality {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        let distances = electorate.distances();
        let everyone = vec![true; distances.candidates()];
        let tallies = plurality_tally(&distances, electorate, 0..distances.voters(), &everyone);
        let winner = argmax(&tallies);
        tracing::debug!(winner, "plurality count finished");
        Ok(Plurality { tallies, winner })
    }

    fn winner(&self) -> usize {
        self.winner
    }
}

impl Plurality {
    /// Summed voter weight for each candidate.
    pub fn tallies(&self) -> &[f64] {
        &self.tallies
    }
}

impl fmt::Display for Plurality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tallies: {}", Values(&normalized(&self.tallies)))
    }
}
