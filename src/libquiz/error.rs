use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("malformed question data: {0}")]
    MalformedData(#[from] serde_json::Error),
    #[error("cannot read question data")]
    Io(#[from] io::Error),
    #[error("{requested} questions requested but only {available} distinct questions available")]
    InsufficientQuestions { requested: usize, available: usize },
    #[error("no guess given")]
    EmptyAnswer,
    #[error("the session is already finished")]
    SessionFinished,
}
