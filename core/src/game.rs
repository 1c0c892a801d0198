//! Game — a batch trial recorder over an ordered list of dice.
//!
//! RULES:
//!   - Dice are heterogeneous on purpose: nothing checks that they
//!     share a face set.
//!   - A play replaces the whole outcome table. There is no partial
//!     update and no history across plays.
//!   - A failed play leaves the previous table untouched.

use crate::{
    die::WeightedDie,
    error::{DiceError, DiceResult},
    types::Face,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ── Outcome table ────────────────────────────────────────────────────────────

/// The wide outcome matrix of one play: rows = roll index, columns =
/// die index, cell = the face that die produced on that roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollTable {
    num_dice: usize,
    rows:     Vec<Vec<Face>>,
}

impl RollTable {
    fn from_columns(columns: Vec<Vec<Face>>, rolls: usize) -> Self {
        let num_dice = columns.len();
        let rows = (0..rolls)
            .map(|r| columns.iter().map(|col| col[r].clone()).collect())
            .collect();
        Self { num_dice, rows }
    }

    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    pub fn num_dice(&self) -> usize {
        self.num_dice
    }

    pub fn row(&self, roll: usize) -> &[Face] {
        &self.rows[roll]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Face]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

// ── Result layouts ───────────────────────────────────────────────────────────

/// Shape selector for [`Game::results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Wide,
    Narrow,
}

impl FromStr for Layout {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        match s {
            "wide" => Ok(Layout::Wide),
            "narrow" => Ok(Layout::Narrow),
            other => Err(DiceError::UnknownLayout {
                layout: other.to_string(),
            }),
        }
    }
}

/// One (roll, die, face) record of the narrow layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrowRecord {
    pub roll: usize,
    pub die:  usize,
    pub face: Face,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameResults {
    Wide(RollTable),
    Narrow(Vec<NarrowRecord>),
}

// ── Game ─────────────────────────────────────────────────────────────────────

pub struct Game {
    dice:  Vec<WeightedDie>,
    table: Option<RollTable>,
}

impl Game {
    /// Take ownership of an ordered die list. The game never touches
    /// their weights; only their sampling streams advance on play.
    pub fn new(dice: Vec<WeightedDie>) -> Self {
        Self { dice, table: None }
    }

    pub fn dice(&self) -> &[WeightedDie] {
        &self.dice
    }

    /// Mutable access to one die, for weight changes between plays.
    pub fn die_mut(&mut self, idx: usize) -> Option<&mut WeightedDie> {
        self.dice.get_mut(idx)
    }

    /// Roll every die `rolls` times, in die order, and store the
    /// resulting table. Each die's draws are independent of every
    /// other die's.
    pub fn play(&mut self, rolls: usize) -> DiceResult<()> {
        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &mut self.dice {
            columns.push(die.roll(rolls)?);
        }
        self.table = Some(RollTable::from_columns(columns, rolls));
        log::info!("game play: {rolls} rolls across {} dice", self.dice.len());
        Ok(())
    }

    /// The stored wide table, if any play has happened.
    pub fn table(&self) -> Option<&RollTable> {
        self.table.as_ref()
    }

    /// Most recent play in the requested layout. Narrow is a
    /// deterministic melt of the wide table: roll-major, die-minor.
    pub fn results(&self, layout: Layout) -> DiceResult<GameResults> {
        let table = self.table.as_ref().ok_or(DiceError::NoResults)?;
        Ok(match layout {
            Layout::Wide => GameResults::Wide(table.clone()),
            Layout::Narrow => {
                let records = table
                    .rows()
                    .enumerate()
                    .flat_map(|(roll, row)| {
                        row.iter().cloned().enumerate().map(move |(die, face)| {
                            NarrowRecord { roll, die, face }
                        })
                    })
                    .collect();
                GameResults::Narrow(records)
            }
        })
    }
}
