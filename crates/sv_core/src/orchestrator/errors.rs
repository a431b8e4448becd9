use thiserror::Error;

use crate::matchers::MatchError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error(transparent)]
    Match(#[from] MatchError),
}

pub type SelectionResult<T> = Result<T, SelectionError>;
