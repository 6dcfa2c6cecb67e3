use std::fmt;

use super::{argmax, normalized, plurality_tally, SpatialMethod, Values};
use crate::{ElectionError, Electorate};

/// Two round system. A plurality round which is decided outright by a
/// majority, otherwise followed by a plurality round between the top two.
#[derive(Debug, Clone)]
pub struct Runoff {
    initial: Vec<f64>,
    // `None` if the first round had a majority
    last: Option<Vec<f64>>,
    winner: usize,
}

impl SpatialMethod for Runoff {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        let distances = electorate.distances();
        let everyone = vec![true; distances.candidates()];
        let initial = plurality_tally(&distances, electorate, 0..distances.voters(), &everyone);
        let leader = argmax(&initial);
        if initial[leader] > electorate.total_weight() / 2.0 {
            tracing::debug!(winner = leader, "runoff decided by first round majority");
            return Ok(Runoff { initial, last: None, winner: leader });
        }

        // A candidate is in the second round if at most one candidate got more
        // votes, so everyone tied at the cutoff gets in.
        let qualified: Vec<bool> = initial
            .iter()
            .map(|t| initial.iter().filter(|&other| other > t).count() <= 1)
            .collect();
        let last = plurality_tally(&distances, electorate, 0..distances.voters(), &qualified);
        let winner = argmax(&last);
        tracing::debug!(winner, "runoff count finished");
        Ok(Runoff { initial, last: Some(last), winner })
    }

    fn winner(&self) -> usize {
        self.winner
    }
}

impl Runoff {
    pub fn initial_tallies(&self) -> &[f64] {
        &self.initial
    }

    /// Tallies of the second round, if there was one.
    pub fn final_tallies(&self) -> Option<&[f64]> {
        self.last.as_deref()
    }
}

impl fmt::Display for Runoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Initial tallies: {}", Values(&normalized(&self.initial)))?;
        if let Some(last) = &self.last {
            write!(f, "\nFinal tallies:   {}", Values(&normalized(last)))?;
        }
        Ok(())
    }
}
