//! dicelab-core — weighted-dice Monte Carlo toolkit.
//!
//! Three cooperating pieces, each depending only on the one before:
//!   1. [`die::WeightedDie`] — a finite discrete distribution over
//!      distinct labeled faces, with mutable per-face weights.
//!   2. [`game::Game`] — rolls an ordered list of dice together and
//!      records the outcome matrix of the most recent batch.
//!   3. [`analyzer::Analyzer`] — descriptive statistics over one
//!      recorded matrix (jackpots, face frequencies, combination and
//!      permutation grouping).
//!
//! Everything is in-memory and single-threaded; the only external
//! contract besides return values is the error taxonomy in
//! [`error::DiceError`].

pub mod analyzer;
pub mod die;
pub mod error;
pub mod game;
pub mod rng;
pub mod types;

pub use analyzer::{Analyzer, FaceCountTable, OutcomeCounts};
pub use die::{DieSnapshot, WeightedDie};
pub use error::{DiceError, DiceResult, ErrorKind};
pub use game::{Game, GameResults, Layout, NarrowRecord, RollTable};
pub use rng::RollRng;
pub use types::{Face, Weight};
