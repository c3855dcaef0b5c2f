use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown generation strategy '{0}'. Must be one of [auto, pipeline, direct]")]
    UnknownStrategy(String),
}
