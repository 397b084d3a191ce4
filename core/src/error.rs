use math::SynthesisError;
use thiserror::Error;

use crate::input::InputError;
use crate::select::SelectionError;

/// Result type specialized for the root-to-polynomial pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a run can fail, tagged with the phase it failed in.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("input: {0}")]
    Input(#[from] InputError),
    #[error("selection: {0}")]
    Selection(#[from] SelectionError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short name of the phase that failed.
    pub fn phase(&self) -> &'static str {
        match self {
            Error::Input(_) => "input",
            Error::Selection(SelectionError::RootDecodeFailed { .. }) => "decode",
            Error::Selection(_) => "selection",
            Error::Synthesis(_) => "synthesis",
            Error::Render(_) => "output",
            Error::Io(_) => "i/o",
        }
    }
}
