//! The tally algorithms.
//!
//! Every method counts an [`Electorate`] into a result type that remembers its
//! intermediate tallies, and implements [`Display`](fmt::Display) to report
//! them.
//!
//! Ties are always resolved the same way: when picking the largest tally the
//! lowest candidate index wins, and when picking the nearest candidate the
//! lowest candidate index wins. See [`argmax`] and
//! [`DistanceMatrix::nearest`](crate::DistanceMatrix::nearest).

use std::fmt;

use crate::{DistanceMatrix, ElectionError, Electorate};

mod condorcet;
pub use condorcet::Condorcet;
mod instant_runoff;
pub use instant_runoff::InstantRunoff;
mod plurality;
pub use plurality::Plurality;
mod primary;
pub use primary::{Party, PartyLine, Primary};
mod runoff;
pub use runoff::Runoff;
mod score;
pub use score::{Approval, Score};

/// Trait shared by every spatial voting method
pub trait SpatialMethod: fmt::Display {
    /// Counts the election, keeping whatever tallies the method produces along
    /// the way.
    fn count(electorate: &Electorate) -> Result<Self, ElectionError>
    where
        Self: Sized;

    /// Index of the winning candidate.
    fn winner(&self) -> usize;
}

/// Index of the largest value. Equal values go to the lowest index.
///
/// `values` must not be empty.
pub fn argmax(values: &[f64]) -> usize {
    debug_assert!(!values.is_empty());
    argmax_among(values, |_| true).unwrap_or(0)
}

/// Index of the largest value among the indices accepted by `eligible`, equal
/// values going to the lowest index.
pub(crate) fn argmax_among<F>(values: &[f64], eligible: F) -> Option<usize>
where
    F: Fn(usize) -> bool,
{
    let mut best: Option<usize> = None;
    for (i, &x) in values.iter().enumerate() {
        if !eligible(i) {
            continue;
        }
        match best {
            Some(b) if x <= values[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Sum the weights of `voters` by the eligible candidate nearest to each of
/// them. Candidates that aren't eligible get nothing.
pub(crate) fn plurality_tally<I>(
    distances: &DistanceMatrix,
    electorate: &Electorate,
    voters: I,
    eligible: &[bool],
) -> Vec<f64>
where
    I: IntoIterator<Item = usize>,
{
    let weights = electorate.voters();
    let mut tallies = vec![0.0; distances.candidates()];
    for v in voters {
        if let Some(c) = distances.nearest(v, eligible) {
            tallies[c] += weights[v].weight;
        }
    }
    tallies
}

/// Tallies divided by their sum. An empty tally stays all zero.
pub fn normalized(tallies: &[f64]) -> Vec<f64> {
    let sum: f64 = tallies.iter().sum();
    if sum > 0.0 {
        tallies.iter().map(|t| t / sum).collect()
    } else {
        vec![0.0; tallies.len()]
    }
}

// Writes `values` as `[a, b, c]` with three decimals.
pub(crate) struct Values<'a>(pub &'a [f64]);

impl fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.3}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    use super::*;
    use crate::{Candidate, Voter};

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a standard rng generated from `Gen`
    pub fn std_rng(g: &mut Gen) -> StdRng {
        let mut seed = [0u8; 32];
        for s in &mut seed {
            *s = Arbitrary::arbitrary(g);
        }
        StdRng::from_seed(seed)
    }

    /// A random election: 1 to 6 candidates spread over `[0, 100]²` and a
    /// cloud of weighted voters around the middle.
    #[derive(Clone, Debug)]
    pub struct Scenario {
        pub candidates: Vec<Candidate>,
        pub voters: Vec<Voter>,
    }

    impl Scenario {
        pub fn electorate(&self) -> Electorate<'_> {
            Electorate::new(&self.candidates, &self.voters).unwrap()
        }
    }

    impl Arbitrary for Scenario {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut rng = std_rng(g);
            let candidates = (0..rng.random_range(1..=6))
                .map(|_| Candidate::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
                .collect();
            let normal = Normal::new(50.0, 20.0).unwrap();
            let voters = (0..rng.random_range(1..=40))
                .map(|_| {
                    let x = normal.sample(&mut rng);
                    let y = normal.sample(&mut rng);
                    Voter::new(x, y, rng.random_range(0.1..5.0))
                })
                .collect();
            Scenario { candidates, voters }
        }
    }

    #[test]
    fn argmax_ties_go_to_lowest_index() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(argmax(&[0.0, 0.0]), 0);
        assert_eq!(argmax(&[5.0]), 0);
        assert_eq!(argmax_among(&[9.0, 3.0, 3.0], |i| i != 0), Some(1));
        assert_eq!(argmax_among(&[9.0, 3.0], |_| false), None);
    }

    #[test]
    fn normalized_sums_to_one() {
        assert_eq!(normalized(&[2.0, 1.0, 1.0]), vec![0.5, 0.25, 0.25]);
        assert_eq!(normalized(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn values_display() {
        assert_eq!(Values(&[2.0 / 3.0, 1.0 / 3.0]).to_string(), "[0.667, 0.333]");
        assert_eq!(Values(&[]).to_string(), "[]");
    }

    #[quickcheck]
    fn qc_every_method_winner_in_range(s: Scenario) -> bool {
        let e = s.electorate();
        let m = s.candidates.len();
        let in_range = |w: usize| w < m;
        in_range(Plurality::count(&e).unwrap().winner())
            && in_range(Runoff::count(&e).unwrap().winner())
            && in_range(InstantRunoff::count(&e).unwrap().winner())
            && in_range(Condorcet::count(&e).unwrap().winner())
            && match Primary::count(&e) {
                Ok(p) => in_range(p.winner()),
                Err(err) => err.kind() == crate::ErrorKind::UnreachablePartition,
            }
            && match Score::count(&e) {
                Ok(p) => in_range(p.winner()),
                // Only a lone candidate makes every voter equidistant
                Err(err) => m == 1 && err.kind() == crate::ErrorKind::DegenerateGeometry,
            }
    }
}
