use ct_core::CtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error(transparent)]
    Config(#[from] CtError),

    #[error("could not start worker pool: {0}")]
    ThreadPool(String),
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;
