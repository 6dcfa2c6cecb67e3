//! Elections in a spatial model of voting. Every candidate and every voter is
//! a point in a two-dimensional issue space, and voters prefer the candidates
//! closest to them.
//!
//! The same electorate can be counted with different methods: plurality, a
//! two-party primary, top-two runoff, instant-runoff, Condorcet and score (with
//! approval as score out of 1).
//!
//! Example usage:
//! ```
//! use spatial_vote::{elect, Candidate, Voter};
//!
//! let candidates = [Candidate::new(0.0, 0.0), Candidate::new(10.0, 0.0)];
//! let voters = [
//!     Voter::new(1.0, 0.0, 1.0),
//!     Voter::new(9.0, 0.0, 1.0),
//!     Voter::new(5.0, 0.0, 1.0),
//! ];
//!
//! // The voter at 5 is equally far from both, and ties go to the lowest index
//! let winner = elect(&candidates, &voters, "plurality", false).unwrap();
//! assert_eq!(winner, 0);
//! ```
//!
//! Results with their tallies are available through the methods themselves:
//! ```
//! use spatial_vote::{methods::{Condorcet, SpatialMethod}, Candidate, Electorate, Voter};
//!
//! let candidates = [Candidate::new(0.0, 0.0), Candidate::new(10.0, 0.0)];
//! let voters = [Voter::new(2.0, 0.0, 3.0), Voter::new(8.0, 0.0, 1.0)];
//! let electorate = Electorate::new(&candidates, &voters).unwrap();
//!
//! let res = Condorcet::count(&electorate).unwrap();
//! assert_eq!(res.margin(0, 1), 50.0);
//! assert_eq!(res.condorcet_winner(), Some(0));
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod methods;

mod electorate;
mod engine;
mod error;
mod vector;

pub use electorate::{Candidate, DistanceMatrix, Electorate, Voter};
pub use engine::{elect, ElectionConfig, ElectionEngine, Outcome, System};
pub use error::{ElectionError, ErrorKind};
pub use methods::{Party, PartyLine};
pub use vector::Vector;

/// Commonly used items
pub mod prelude {
    pub use super::{methods::SpatialMethod, Candidate, Electorate, System, Voter};
}
