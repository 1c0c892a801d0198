//! Weighted die — a finite discrete distribution over labeled faces.
//!
//! This module:
//!   1. Validates a face set at construction (non-empty, homogeneous,
//!      distinct) and freezes it for the die's lifetime.
//!   2. Holds one mutable weight per face, all 1.0 at construction.
//!   3. Samples faces with replacement, proportionally to weight.
//!
//! Sampling uses ONE probability vector fixed at the top of each
//! `roll` call; weight changes between calls take effect on the next
//! call, never mid-batch.

use crate::{
    error::{DiceError, DiceResult},
    rng::RollRng,
    types::{Face, Weight},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ── Public types ─────────────────────────────────────────────────────────────

/// An owned copy of a die's face/weight table. Mutating a snapshot
/// never affects the die it was taken from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieSnapshot {
    pub faces:   Vec<Face>,
    pub weights: Vec<Weight>,
}

#[derive(Debug)]
pub struct WeightedDie {
    faces:   Vec<Face>,
    weights: Vec<Weight>,
    rng:     RollRng,
}

// ── Construction ─────────────────────────────────────────────────────────────

impl WeightedDie {
    /// Build a die with an entropy-seeded sampling stream.
    pub fn new(faces: Vec<Face>) -> DiceResult<Self> {
        Self::with_rng(faces, RollRng::from_entropy())
    }

    /// Build a die with a reproducible sampling stream.
    pub fn with_seed(faces: Vec<Face>, seed: u64) -> DiceResult<Self> {
        Self::with_rng(faces, RollRng::seed_from_u64(seed))
    }

    /// Build a die around an explicit stream. This is how a game
    /// runner hands each die its slot in a master-seeded RNG bank.
    pub fn with_rng(faces: Vec<Face>, rng: RollRng) -> DiceResult<Self> {
        validate_faces(&faces)?;
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights, rng })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Owned copy of the current face/weight table.
    pub fn snapshot(&self) -> DieSnapshot {
        DieSnapshot {
            faces:   self.faces.clone(),
            weights: self.weights.clone(),
        }
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Replace the weight of one face. Every other weight is left
    /// untouched, including on failure.
    pub fn set_weight(&mut self, face: impl Into<Face>, new_weight: Weight) -> DiceResult<()> {
        let face = face.into();
        let idx = self
            .faces
            .iter()
            .position(|f| *f == face)
            .ok_or(DiceError::FaceNotFound { face })?;

        if !new_weight.is_finite() {
            return Err(DiceError::NonFiniteWeight { value: new_weight });
        }
        if new_weight < 0.0 {
            return Err(DiceError::NegativeWeight { value: new_weight });
        }

        self.weights[idx] = new_weight;
        Ok(())
    }

    // ── Sampling ─────────────────────────────────────────────────────────────

    /// Draw `times` faces independently, with replacement, each face
    /// selected with probability weight / sum(weights). `times` may
    /// exceed the face count; `times == 0` yields an empty vec.
    pub fn roll(&mut self, times: usize) -> DiceResult<Vec<Face>> {
        let total: Weight = self.weights.iter().sum();
        if total <= 0.0 {
            return Err(DiceError::ZeroTotalWeight);
        }

        // One fixed cumulative distribution for the whole batch.
        // A zero-weight face contributes a zero-width slot, so it can
        // never be selected.
        let mut cumulative = Vec::with_capacity(self.weights.len());
        let mut acc = 0.0;
        for w in &self.weights {
            acc += w / total;
            cumulative.push(acc);
        }
        // Guard the top edge against float round-down.
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }

        let mut outcomes = Vec::with_capacity(times);
        for _ in 0..times {
            let u = self.rng.next_f64();
            let idx = cumulative.partition_point(|&edge| edge <= u);
            outcomes.push(self.faces[idx.min(self.faces.len() - 1)].clone());
        }

        log::debug!("die roll: {times} draws over {} faces", self.faces.len());
        Ok(outcomes)
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

fn validate_faces(faces: &[Face]) -> DiceResult<()> {
    let first = match faces.first() {
        Some(f) => f,
        None => return Err(DiceError::EmptyFaceSet),
    };

    if faces.iter().any(|f| !f.same_kind(first)) {
        return Err(DiceError::MixedFaceTypes);
    }

    let mut seen = HashSet::with_capacity(faces.len());
    for face in faces {
        if !seen.insert(face) {
            return Err(DiceError::DuplicateFace { face: face.clone() });
        }
    }
    Ok(())
}
