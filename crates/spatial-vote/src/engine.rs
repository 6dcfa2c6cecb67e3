//! Choosing and running a method by name.

use std::{fmt, str::FromStr};

use crate::{
    methods::{
        Approval, Condorcet, InstantRunoff, PartyLine, Plurality, Primary, Runoff, Score,
        SpatialMethod,
    },
    Candidate, ElectionError, Electorate, Voter,
};

/// The electoral systems the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum System {
    Plurality,
    Primary,
    Runoff,
    InstantRunoff,
    Condorcet,
    Score,
    Approval,
}

impl System {
    pub const ALL: [System; 7] = [
        System::Plurality,
        System::Primary,
        System::Runoff,
        System::InstantRunoff,
        System::Condorcet,
        System::Score,
        System::Approval,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            System::Plurality => "plurality",
            System::Primary => "primary",
            System::Runoff => "runoff",
            System::InstantRunoff => "instant-runoff",
            System::Condorcet => "condorcet",
            System::Score => "score",
            System::Approval => "approval",
        }
    }
}

impl FromStr for System {
    type Err = ElectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        System::ALL
            .into_iter()
            .find(|system| system.name() == s)
            .ok_or_else(|| ElectionError::UnknownSystem(s.to_owned()))
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Parameters shared by every election an [`ElectionEngine`] runs.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ElectionConfig {
    /// Where [`System::Primary`] splits the two parties
    pub party_line: PartyLine,

    /// Highest score a voter can give in [`System::Score`]
    pub max_score: u32,

    /// Largest number of candidate-voter pairs accepted in one election
    pub max_entries: usize,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        ElectionConfig {
            party_line: PartyLine::default(),
            max_score: Score::DEFAULT_MAX,
            max_entries: 1 << 24,
        }
    }
}

/// The full result of running one system.
#[derive(Debug, Clone)]
pub enum Outcome {
    Plurality(Plurality),
    Primary(Primary),
    Runoff(Runoff),
    InstantRunoff(InstantRunoff),
    Condorcet(Condorcet),
    Score(Score),
    Approval(Approval),
}

impl Outcome {
    pub fn system(&self) -> System {
        match self {
            Outcome::Plurality(_) => System::Plurality,
            Outcome::Primary(_) => System::Primary,
            Outcome::Runoff(_) => System::Runoff,
            Outcome::InstantRunoff(_) => System::InstantRunoff,
            Outcome::Condorcet(_) => System::Condorcet,
            Outcome::Score(_) => System::Score,
            Outcome::Approval(_) => System::Approval,
        }
    }

    pub fn winner(&self) -> usize {
        match self {
            Outcome::Plurality(o) => o.winner(),
            Outcome::Primary(o) => o.winner(),
            Outcome::Runoff(o) => o.winner(),
            Outcome::InstantRunoff(o) => o.winner(),
            Outcome::Condorcet(o) => o.winner(),
            Outcome::Score(o) => o.winner(),
            Outcome::Approval(o) => o.winner(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Plurality(o) => fmt::Display::fmt(o, f),
            Outcome::Primary(o) => fmt::Display::fmt(o, f),
            Outcome::Runoff(o) => fmt::Display::fmt(o, f),
            Outcome::InstantRunoff(o) => fmt::Display::fmt(o, f),
            Outcome::Condorcet(o) => fmt::Display::fmt(o, f),
            Outcome::Score(o) => fmt::Display::fmt(o, f),
            Outcome::Approval(o) => fmt::Display::fmt(o, f),
        }
    }
}

/// Runs elections with a fixed [`ElectionConfig`].
#[derive(Debug, Clone, Default)]
pub struct ElectionEngine {
    config: ElectionConfig,
}

impl ElectionEngine {
    pub fn new(config: ElectionConfig) -> Self {
        ElectionEngine { config }
    }

    pub fn config(&self) -> &ElectionConfig {
        &self.config
    }

    /// Count the election under `system`, keeping every intermediate tally.
    ///
    /// Each part of the config is checked only by the system that reads it.
    pub fn run(
        &self,
        candidates: &[Candidate],
        voters: &[Voter],
        system: System,
    ) -> Result<Outcome, ElectionError> {
        let entries = candidates.len().saturating_mul(voters.len());
        if entries > self.config.max_entries {
            return Err(ElectionError::TooLarge {
                candidates: candidates.len(),
                voters: voters.len(),
                limit: self.config.max_entries,
            });
        }
        let electorate = Electorate::new(candidates, voters)?;
        let _span = tracing::debug_span!(
            "elect",
            %system,
            candidates = candidates.len(),
            voters = voters.len()
        )
        .entered();
        let outcome = match system {
            System::Plurality => Outcome::Plurality(Plurality::count(&electorate)?),
            System::Primary => {
                Outcome::Primary(Primary::count_with(&electorate, &self.config.party_line)?)
            }
            System::Runoff => Outcome::Runoff(Runoff::count(&electorate)?),
            System::InstantRunoff => Outcome::InstantRunoff(InstantRunoff::count(&electorate)?),
            System::Condorcet => Outcome::Condorcet(Condorcet::count(&electorate)?),
            System::Score => {
                Outcome::Score(Score::count_with(&electorate, self.config.max_score)?)
            }
            System::Approval => Outcome::Approval(Approval::count(&electorate)?),
        };
        Ok(outcome)
    }

    /// Index of the candidate who wins under the system named `system`. With
    /// `verbose` the tallies behind the result are printed.
    pub fn elect(
        &self,
        candidates: &[Candidate],
        voters: &[Voter],
        system: &str,
        verbose: bool,
    ) -> Result<usize, ElectionError> {
        let system: System = system.parse()?;
        let outcome = self.run(candidates, voters, system)?;
        if verbose {
            println!("{}", outcome);
        }
        Ok(outcome.winner())
    }
}

/// Index of the candidate who wins under the system named `system`, using the
/// default [`ElectionConfig`].
///
/// `system` is one of `plurality`, `primary`, `runoff`, `instant-runoff`,
/// `condorcet`, `score` or `approval`. With `verbose` the tallies behind the
/// result are printed.
pub fn elect(
    candidates: &[Candidate],
    voters: &[Voter],
    system: &str,
    verbose: bool,
) -> Result<usize, ElectionError> {
    ElectionEngine::default().elect(candidates, voters, system, verbose)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{methods::tests::Scenario, ErrorKind, Party, Vector};

    fn line() -> (Vec<Candidate>, Vec<Voter>) {
        let candidates =
            vec![Candidate::new(0.0, 0.0), Candidate::new(5.0, 0.0), Candidate::new(10.0, 0.0)];
        let voters =
            vec![Voter::new(0.0, 0.0, 4.0), Voter::new(5.0, 0.0, 3.0), Voter::new(10.0, 0.0, 2.0)];
        (candidates, voters)
    }

    #[test]
    fn system_names() {
        for system in System::ALL {
            assert_eq!(system.name().parse::<System>().unwrap(), system);
            assert_eq!(system.to_string(), system.name());
        }
        assert_eq!(format!("{:>10}", System::Score), "     score");
        assert_eq!(
            "borda".parse::<System>().unwrap_err(),
            ElectionError::UnknownSystem("borda".to_owned())
        );
        assert!("Plurality".parse::<System>().is_err());
    }

    #[test]
    fn dispatch() {
        let (candidates, voters) = line();
        assert_eq!(elect(&candidates, &voters, "plurality", false).unwrap(), 0);
        assert_eq!(elect(&candidates, &voters, "runoff", false).unwrap(), 1);
        assert_eq!(elect(&candidates, &voters, "instant-runoff", false).unwrap(), 1);
        assert_eq!(elect(&candidates, &voters, "condorcet", false).unwrap(), 1);
        assert_eq!(elect(&candidates, &voters, "score", true).unwrap(), 1);
        // Halfway between nearest and farthest rounds down to no approval
        assert_eq!(elect(&candidates, &voters, "approval", false).unwrap(), 0);
        let err = elect(&candidates, &voters, "primary", false).unwrap_err();
        assert_eq!(err, ElectionError::UnreachablePartition { party: Party::North });
    }

    #[test]
    fn invalid_configuration() {
        let (candidates, voters) = line();
        let unknown = elect(&candidates, &voters, "dictator", false).unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::InvalidConfiguration);
        assert_eq!(elect(&[], &voters, "plurality", false), Err(ElectionError::NoCandidates));
        assert_eq!(elect(&candidates, &[], "plurality", false), Err(ElectionError::NoVoters));
    }

    #[test]
    fn config_is_used() {
        let (candidates, voters) = line();
        // Split the line at x = 2.5, leaving candidate 0 alone in the south
        let config = ElectionConfig {
            party_line: PartyLine::new(Vector::new(1.0, 0.0), 2.5).unwrap(),
            ..ElectionConfig::default()
        };
        let engine = ElectionEngine::new(config);
        let outcome = engine.run(&candidates, &voters, System::Primary).unwrap();
        assert_eq!(outcome.system(), System::Primary);
        assert_eq!(outcome.winner(), 1);
        assert!(outcome.to_string().starts_with("Dividing line: 0.000 y + 1.000 x = 2.500"));
    }

    #[test]
    fn config_is_checked_by_the_system_using_it() {
        let (candidates, voters) = line();
        let config = ElectionConfig {
            party_line: PartyLine { axis: Vector::new(f64::NAN, 1.0), boundary: 0.0 },
            max_score: 0,
            ..ElectionConfig::default()
        };
        let engine = ElectionEngine::new(config);
        assert_eq!(
            engine.run(&candidates, &voters, System::Score).unwrap_err(),
            ElectionError::ZeroMaxScore
        );
        assert_eq!(
            engine.run(&candidates, &voters, System::Primary).unwrap_err(),
            ElectionError::InvalidPartyLine
        );
        for system in [System::Plurality, System::Runoff, System::Condorcet, System::Approval] {
            assert!(engine.run(&candidates, &voters, system).is_ok(), "{}", system);
        }
    }

    #[test]
    fn too_large() {
        let (candidates, voters) = line();
        let engine =
            ElectionEngine::new(ElectionConfig { max_entries: 8, ..ElectionConfig::default() });
        assert_eq!(
            engine.elect(&candidates, &voters, "plurality", false),
            Err(ElectionError::TooLarge { candidates: 3, voters: 3, limit: 8 })
        );
    }

    #[test]
    fn config_from_json_defaults() {
        let config: ElectionConfig = serde_json::from_str(r#"{ "max_score": 5 }"#).unwrap();
        assert_eq!(config.max_score, 5);
        assert_eq!(config.party_line, PartyLine::default());
        let system: System = serde_json::from_str(r#""instant-runoff""#).unwrap();
        assert_eq!(system, System::InstantRunoff);
    }

    #[quickcheck]
    fn qc_outcome_matches_elect(s: Scenario) -> bool {
        let engine = ElectionEngine::default();
        System::ALL.into_iter().all(|system| {
            match (
                engine.run(&s.candidates, &s.voters, system),
                engine.elect(&s.candidates, &s.voters, system.name(), false),
            ) {
                (Ok(outcome), Ok(winner)) => {
                    outcome.system() == system
                        && outcome.winner() == winner
                        && winner < s.candidates.len()
                }
                (Err(a), Err(b)) => a == b,
                _ => false,
            }
        })
    }
}
