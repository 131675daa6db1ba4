use ising_core::IsingError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] IsingError),

    #[error("no samples left after cutoff {cutoff} (series length {len})")]
    EmptySeries {
        len:    usize,
        cutoff: usize,
    },

    #[error("energy series has {energies} samples but magnetization series has {magnetizations}")]
    LengthMismatch {
        energies:       usize,
        magnetizations: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
