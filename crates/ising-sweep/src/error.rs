use ising_core::IsingError;
use ising_output::OutputError;
use ising_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("no observables for temperature(s) {temperatures:?}")]
    IncompleteResults { temperatures: Vec<f64> },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Core(#[from] IsingError),
}

pub type SweepResult<T> = Result<T, SweepError>;
