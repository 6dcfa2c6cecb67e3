use std::{fs, path::Path};

use anyhow::Context;
use spatial_vote::{Candidate, ElectionConfig, ElectionEngine, System, Voter};

/// An election read from a JSON file.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Scenario {
    pub candidates: Vec<Candidate>,
    pub voters: Vec<Voter>,

    /// System to count with when none is given on the command line
    #[serde(default = "default_system")]
    pub system: System,

    #[serde(default)]
    pub config: ElectionConfig,
}

fn default_system() -> System {
    System::Plurality
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Name of the system to count with: `requested` if given, otherwise the
    /// scenario's own.
    pub fn system_name<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or_else(|| self.system.name())
    }

    /// One line per system with its winner, or the error that stopped it.
    /// With `verbose` each winner is followed by the tallies behind it.
    pub fn count_all(&self, verbose: bool) -> Vec<String> {
        let engine = ElectionEngine::new(self.config.clone());
        let mut lines = Vec::new();
        for system in System::ALL {
            match engine.run(&self.candidates, &self.voters, system) {
                Ok(outcome) => {
                    lines.push(format!("{:>15}: {}", system, outcome.winner()));
                    if verbose {
                        lines.push(outcome.to_string());
                    }
                }
                // One system failing doesn't stop the others
                Err(e) => lines.push(format!("{:>15}: {}", system, e)),
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let scenario = Scenario::parse(
            r#"{
                "candidates": [{ "x": 0.0, "y": 0.0 }, { "x": 10.0, "y": 0.0 }],
                "voters": [{ "x": 1.0, "y": 0.0, "weight": 2.0 }]
            }"#,
        )
        .unwrap();
        assert_eq!(scenario.candidates.len(), 2);
        assert_eq!(scenario.voters[0].weight, 2.0);
        assert_eq!(scenario.system, System::Plurality);
        assert_eq!(scenario.config, ElectionConfig::default());
    }

    #[test]
    fn system_and_config() {
        let scenario = Scenario::parse(
            r#"{
                "candidates": [{ "x": 0.0, "y": 0.0 }],
                "voters": [{ "x": 1.0, "y": 0.0, "weight": 1.0 }],
                "system": "primary",
                "config": { "party_line": { "axis": { "x": 1.0, "y": 0.0 }, "boundary": 5.0 } }
            }"#,
        )
        .unwrap();
        assert_eq!(scenario.system, System::Primary);
        assert_eq!(scenario.config.party_line.boundary, 5.0);
        assert_eq!(scenario.config.max_score, 10);
    }

    fn two_parties() -> Scenario {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/two-parties.json");
        Scenario::load(&path).unwrap()
    }

    #[test]
    fn bundled_scenario_counts_with_every_system() {
        let scenario = two_parties();
        assert_eq!(scenario.system, System::Primary);
        let lines = scenario.count_all(false);
        assert_eq!(lines.len(), System::ALL.len());
        for (line, system) in lines.iter().zip(System::ALL) {
            let (name, winner) = line.split_once(": ").unwrap();
            assert_eq!(name.trim_start(), system.name());
            assert!(winner.parse::<usize>().unwrap() < scenario.candidates.len());
        }
    }

    #[test]
    fn count_all_verbose_adds_tallies() {
        let scenario = two_parties();
        let lines = scenario.count_all(true);
        assert_eq!(lines.len(), 2 * System::ALL.len());
        assert!(lines[0].starts_with("      plurality: "));
        assert!(lines[1].starts_with("Tallies: "));
        assert!(lines[3].starts_with("Dividing line: 1.000 y + 0.000 x = 32.500"));
    }

    #[test]
    fn count_all_reports_errors_per_system() {
        let scenario = Scenario::parse(
            r#"{
                "candidates": [{ "x": 0.0, "y": 0.0 }, { "x": 10.0, "y": 0.0 }],
                "voters": [{ "x": 1.0, "y": 0.0, "weight": 1.0 }]
            }"#,
        )
        .unwrap();
        let lines = scenario.count_all(false);
        assert_eq!(lines[0], "      plurality: 0");
        assert_eq!(lines[1], "        primary: party N has no candidates to nominate");
        assert_eq!(lines.len(), System::ALL.len());
    }

    #[test]
    fn system_override() {
        let scenario = two_parties();
        assert_eq!(scenario.system_name(None), "primary");
        assert_eq!(scenario.system_name(Some("condorcet")), "condorcet");
    }

    #[test]
    fn missing_file() {
        let err = Scenario::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read scenario"));
    }

    #[test]
    fn unknown_system_is_rejected() {
        let res = Scenario::parse(r#"{ "candidates": [], "voters": [], "system": "borda" }"#);
        assert!(res.is_err());
    }
}
