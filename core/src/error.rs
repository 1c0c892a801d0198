//! Error taxonomy for the toolkit.
//!
//! Every failure is raised synchronously at the offending call and
//! leaves the object it was called on untouched. Variants carry the
//! context a caller needs to correct the input; [`DiceError::kind`]
//! collapses them into the three classes of the public contract.

use crate::types::{Face, Weight};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("face set must contain at least one face")]
    EmptyFaceSet,

    #[error("face set mixes integer and text labels")]
    MixedFaceTypes,

    #[error("duplicate face '{face}' in face set")]
    DuplicateFace { face: Face },

    #[error("weight {value} is not a finite number")]
    NonFiniteWeight { value: Weight },

    #[error("weight {value} is negative")]
    NegativeWeight { value: Weight },

    #[error("die weights sum to zero, no face can be sampled")]
    ZeroTotalWeight,

    #[error("unknown result layout '{layout}' (expected 'wide' or 'narrow')")]
    UnknownLayout { layout: String },

    #[error("face '{face}' not present on this die")]
    FaceNotFound { face: Face },

    #[error("no results recorded yet, call play() first")]
    NoResults,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The coarse class of a [`DiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    NotReady,
}

impl DiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiceError::EmptyFaceSet
            | DiceError::MixedFaceTypes
            | DiceError::DuplicateFace { .. }
            | DiceError::NonFiniteWeight { .. }
            | DiceError::NegativeWeight { .. }
            | DiceError::ZeroTotalWeight
            | DiceError::UnknownLayout { .. }
            | DiceError::Other(_) => ErrorKind::InvalidArgument,
            DiceError::FaceNotFound { .. } => ErrorKind::NotFound,
            DiceError::NoResults => ErrorKind::NotReady,
        }
    }
}

pub type DiceResult<T> = Result<T, DiceError>;
