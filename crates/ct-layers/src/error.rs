use ct_core::{CtError, DayOfWeek};
use thiserror::Error;

use crate::Dimension;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error(transparent)]
    Core(#[from] CtError),

    #[error("no dimensions declared")]
    NoDimensions,

    #[error("dimension {0} declared more than once")]
    DuplicateDimension(Dimension),

    #[error("dimension {0} cannot be read from trip points")]
    NotATripDimension(Dimension),

    #[error("dimension {0} is not part of this layer set")]
    UnknownDimension(Dimension),

    #[error("selection dimensions {got:?} do not match layer dimensions {expected:?}")]
    DimensionMismatch {
        expected: Vec<Dimension>,
        got:      Vec<Dimension>,
    },

    #[error("interval controls need [Day, Interval] layers, got {0:?}")]
    NotDayInterval(Vec<Dimension>),

    #[error("no layers for day {0}")]
    UnknownDay(DayOfWeek),

    #[error("step {index} out of range ({len} steps)")]
    StepOutOfRange { index: usize, len: usize },
}

pub type LayerResult<T> = Result<T, LayerError>;
