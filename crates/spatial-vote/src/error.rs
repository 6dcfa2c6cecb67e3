use crate::Party;

/// Everything that can stop an election from producing a winner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElectionError {
    #[error("unknown system: {0}")]
    UnknownSystem(String),
    #[error("an election needs at least one candidate")]
    NoCandidates,
    #[error("an election needs at least one voter")]
    NoVoters,
    #[error("candidate {0} has a non-finite position")]
    InvalidCandidate(usize),
    #[error("voter {voter} has a non-finite position or an invalid weight ({weight})")]
    InvalidVoter { voter: usize, weight: f64 },
    #[error("total voter weight must be positive, got {0}")]
    NonPositiveWeight(f64),
    #[error("max score must be at least 1")]
    ZeroMaxScore,
    #[error("party line must have a finite axis and boundary")]
    InvalidPartyLine,
    #[error("{candidates} candidates and {voters} voters exceed {limit} matrix entries")]
    TooLarge { candidates: usize, voters: usize, limit: usize },
    #[error("voter {voter} is equidistant from every candidate, scores can't be rescaled")]
    DegenerateGeometry { voter: usize },
    #[error("party {party} has no candidates to nominate")]
    UnreachablePartition { party: Party },
}

/// Coarse classification of [`ElectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller asked for something that can't be counted: an unknown
    /// system, empty or malformed inputs, bad parameters.
    InvalidConfiguration,
    /// The positions make a method's arithmetic undefined.
    DegenerateGeometry,
    /// The primary split left a party without candidates.
    UnreachablePartition,
}

impl ElectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ElectionError::DegenerateGeometry { .. } => ErrorKind::DegenerateGeometry,
            ElectionError::UnreachablePartition { .. } => ErrorKind::UnreachablePartition,
            ElectionError::UnknownSystem(_)
            | ElectionError::NoCandidates
            | ElectionError::NoVoters
            | ElectionError::InvalidCandidate(_)
            | ElectionError::InvalidVoter { .. }
            | ElectionError::NonPositiveWeight(_)
            | ElectionError::ZeroMaxScore
            | ElectionError::InvalidPartyLine
            | ElectionError::TooLarge { .. } => ErrorKind::InvalidConfiguration,
        }
    }
}
