//! Analyzer — descriptive statistics over one game's outcome table.
//!
//! This module:
//!   1. Snapshots the wide table at construction; later plays on the
//!      same game never leak into an existing analyzer.
//!   2. Counts jackpots (rows where every die agrees).
//!   3. Builds a per-roll face-frequency table over the union of all
//!      faces observed anywhere in the table.
//!   4. Groups rows into order-insensitive combinations and
//!      order-sensitive permutations.
//!
//! Every accessor recomputes from the snapshot. No caching, so two
//! calls with no intervening state change are value-identical.

use crate::{
    error::{DiceError, DiceResult},
    game::{Game, RollTable},
    types::Face,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

// ── Public types ─────────────────────────────────────────────────────────────

/// Per-roll face frequencies. `faces` is the sorted union of every
/// face observed in the table; `rows[r][c]` is how many times
/// `faces[c]` appeared in roll `r` (zero when absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceCountTable {
    pub faces: Vec<Face>,
    pub rows:  Vec<Vec<usize>>,
}

impl FaceCountTable {
    pub fn num_rolls(&self) -> usize {
        self.rows.len()
    }

    /// Count of `face` in roll `roll`; zero for a face never observed.
    pub fn count(&self, roll: usize, face: &Face) -> usize {
        match self.faces.binary_search(face) {
            Ok(col) => self.rows[roll][col],
            Err(_) => 0,
        }
    }
}

/// Rows grouped by outcome key. Keyed by a `BTreeMap` so iteration
/// order is key-lexicographic and therefore deterministic.
pub type OutcomeCounts = BTreeMap<Vec<Face>, usize>;

// ── Analyzer ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Analyzer {
    table: RollTable,
}

impl Analyzer {
    /// Snapshot the game's wide table. Fails with `NoResults` if the
    /// game has never been played.
    pub fn new(game: &Game) -> DiceResult<Self> {
        let table = game.table().ok_or(DiceError::NoResults)?.clone();
        log::debug!(
            "analyzer snapshot: {} rolls x {} dice",
            table.num_rolls(),
            table.num_dice()
        );
        Ok(Self { table })
    }

    pub fn num_rolls(&self) -> usize {
        self.table.num_rolls()
    }

    pub fn num_dice(&self) -> usize {
        self.table.num_dice()
    }

    /// Rows where every die produced the same face. A single die
    /// matches trivially (one distinct value); a zero-die game has
    /// zero distinct values per row and therefore zero jackpots.
    pub fn jackpot_count(&self) -> usize {
        self.table
            .rows()
            .filter(|row| row.iter().collect::<HashSet<_>>().len() == 1)
            .count()
    }

    /// Per-roll frequency of every face observed anywhere in the
    /// table. Columns are the union across all dice, not per-die
    /// face sets.
    pub fn face_counts(&self) -> FaceCountTable {
        let faces: Vec<Face> = self
            .table
            .rows()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();

        let rows = self
            .table
            .rows()
            .map(|row| {
                faces
                    .iter()
                    .map(|face| row.iter().filter(|f| *f == face).count())
                    .collect()
            })
            .collect();

        FaceCountTable { faces, rows }
    }

    /// Order-insensitive outcome groups: each row's faces sorted
    /// ascending form the key, the value counts rows sharing it.
    pub fn combo_counts(&self) -> OutcomeCounts {
        self.group_rows(|row| {
            let mut key = row.to_vec();
            key.sort();
            key
        })
    }

    /// Order-sensitive outcome groups: the key is the row in original
    /// die order, so the same multiset in a different die order is a
    /// distinct entry.
    pub fn permutation_counts(&self) -> OutcomeCounts {
        self.group_rows(|row| row.to_vec())
    }

    fn group_rows(&self, key_fn: impl Fn(&[Face]) -> Vec<Face>) -> OutcomeCounts {
        let mut counts = OutcomeCounts::new();
        for row in self.table.rows() {
            *counts.entry(key_fn(row)).or_insert(0) += 1;
        }
        counts
    }
}
