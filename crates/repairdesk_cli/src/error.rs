//! Errors raised while driving the interactive session.

use repairdesk_core::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug)]
pub enum UiError {
    /// Terminal read or write failed.
    Io(std::io::Error),
    /// The operator closed standard input.
    InputClosed,
    /// Storage failed underneath a page.
    Repo(RepoError),
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::InputClosed => write!(f, "input closed"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for UiError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for UiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
