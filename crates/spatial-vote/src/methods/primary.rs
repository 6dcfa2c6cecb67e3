use std::fmt;

use super::{argmax, argmax_among, normalized, plurality_tally, SpatialMethod, Values};
use crate::{ElectionError, Electorate, Vector};

/// One of the two parties of a [`Primary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Party {
    /// Everything below the party line
    South,
    /// Everything on or above the party line
    North,
}

impl Party {
    pub const BOTH: [Party; 2] = [Party::South, Party::North];

    pub const fn index(self) -> usize {
        match self {
            Party::South => 0,
            Party::North => 1,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::South => write!(f, "S"),
            Party::North => write!(f, "N"),
        }
    }
}

/// The line dividing the issue space between the two parties.
///
/// A point belongs to [`Party::North`] if its projection onto `axis` is at
/// least `boundary`, otherwise to [`Party::South`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PartyLine {
    pub axis: Vector,
    pub boundary: f64,
}

impl Default for PartyLine {
    fn default() -> Self {
        PartyLine { axis: Vector::new(0.0, 1.0), boundary: 32.5 }
    }
}

impl PartyLine {
    pub fn new(axis: Vector, boundary: f64) -> Result<Self, ElectionError> {
        let line = PartyLine { axis, boundary };
        line.validate()?;
        Ok(line)
    }

    pub fn validate(&self) -> Result<(), ElectionError> {
        if self.axis.is_finite() && self.boundary.is_finite() {
            Ok(())
        } else {
            Err(ElectionError::InvalidPartyLine)
        }
    }

    pub fn affiliation(&self, point: &Vector) -> Party {
        if self.axis.dot(point) >= self.boundary {
            Party::North
        } else {
            Party::South
        }
    }
}

/// Each party nominates its plurality winner among its own voters and
/// candidates, then the two nominees face a plurality general election.
#[derive(Debug, Clone)]
pub struct Primary {
    line: PartyLine,
    primaries: [Vec<f64>; 2],
    nominees: [usize; 2],
    general: Vec<f64>,
    winner: usize,
}

impl SpatialMethod for Primary {
    fn count(electorate: &Electorate) -> Result<Self, ElectionError> {
        Primary::count_with(electorate, &PartyLine::default())
    }

    fn winner(&self) -> usize {
        self.winner
    }
}

impl Primary {
    /// Count a primary where the parties are split by `line`.
    pub fn count_with(electorate: &Electorate, line: &PartyLine) -> Result<Self, ElectionError> {
        line.validate()?;
        let distances = electorate.distances();
        let candidate_party: Vec<Party> =
            electorate.candidates().iter().map(|c| line.affiliation(&c.position())).collect();
        let voter_party: Vec<Party> =
            electorate.voters().iter().map(|v| line.affiliation(&v.position())).collect();

        let mut primaries = [Vec::new(), Vec::new()];
        let mut nominees = [0; 2];
        for party in Party::BOTH {
            let eligible: Vec<bool> = candidate_party.iter().map(|&p| p == party).collect();
            let members = (0..distances.voters()).filter(|&v| voter_party[v] == party);
            let tallies = plurality_tally(&distances, electorate, members, &eligible);
            let nominee = argmax_among(&tallies, |c| eligible[c])
                .ok_or(ElectionError::UnreachablePartition { party })?;
            tracing::debug!(%party, nominee, "primary nominee chosen");
            nominees[party.index()] = nominee;
            primaries[party.index()] = tallies;
        }

        let mut finalists = vec![false; distances.candidates()];
        for &n in &nominees {
            finalists[n] = true;
        }
        let general = plurality_tally(&distances, electorate, 0..distances.voters(), &finalists);
        let winner = argmax(&general);
        tracing::debug!(winner, "primary count finished");
        Ok(Primary { line: *line, primaries, nominees, general, winner })
    }

    pub fn party_line(&self) -> &PartyLine {
        &self.line
    }

    /// Summed weight of the party's voters for each candidate in its primary.
    pub fn primary_tallies(&self, party: Party) -> &[f64] {
        &self.primaries[party.index()]
    }

    pub fn nominee(&self, party: Party) -> usize {
        self.nominees[party.index()]
    }

    /// Summed voter weight for each candidate in the general election.
    pub fn general_tallies(&self) -> &[f64] {
        &self.general
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PartyLine { axis, boundary } = self.line;
        writeln!(f, "Dividing line: {:.3} y + {:.3} x = {:.3}", axis.y, axis.x, boundary)?;
        for party in Party::BOTH {
            let tallies = normalized(self.primary_tallies(party));
            writeln!(f, "Primary {} tallies: {}", party, Values(&tallies))?;
        }
        write!(f, "Final tallies:   {}", Values(&normalized(&self.general)))
    }
}
