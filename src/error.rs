use dummyapi::DummyApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no api key provided")]
    MissingKey,

    #[error(transparent)]
    Api(#[from] DummyApiError),
}
