use thiserror::Error;

pub type Result<T> = ::core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a die needs at least one face")]
    NoFaces,
    #[error("face {face} appears more than once")]
    DuplicateFace { face: String },
    #[error("face {face} is not on this die")]
    UnknownFace { face: String },
    #[error("weight is not a finite number")]
    InvalidWeight,
    #[error("weight must be non-negative, got {weight}")]
    NegativeWeight { weight: f64 },
    #[error("all weights are zero")]
    ZeroWeights,
    #[error("weights add up to more than f64::MAX")]
    WeightOverflow,
    #[error("a game needs at least one die")]
    NoDice,
    #[error("die {index} has {found} faces, expected {expected}")]
    FaceCountMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("number of rolls must be positive")]
    InvalidRollCount,
    #[error("game has not been played yet")]
    NoResults,
    #[error("invalid form {form:?}, expected \"wide\" or \"narrow\"")]
    InvalidForm { form: String },
}

impl Error {
    pub(crate) fn face<T: std::fmt::Debug + ?Sized>(face: &T) -> String {
        format!("{face:?}")
    }
}
