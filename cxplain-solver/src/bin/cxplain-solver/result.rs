use std::path::Path;

use cxplain_solver::kb::KnowledgeBaseError;
use cxplain_solver::kb::ParseAssignmentError;
use cxplain_solver::ExplanationError;
use thiserror::Error;

pub(crate) type CXPlainResult<T> = Result<T, CXPlainError>;

#[derive(Error, Debug)]
pub(crate) enum CXPlainError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The knowledge base is invalid, more details: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),
    #[error("Failed to parse the assignments, more details: {0}")]
    InvalidAssignments(#[from] ParseAssignmentError),
    #[error("Failed to find an explanation, more details: {0}")]
    Explanation(#[from] ExplanationError),
    #[error("The {0} was not provided, either inline or as a file.")]
    MissingAssignments(&'static str),
    #[error("Failed to read the {what} from {path}, more details: {source}")]
    UnreadableAssignments {
        what: &'static str,
        path: String,
        source: std::io::Error,
    },
}

impl CXPlainError {
    pub(crate) fn unreadable(what: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::UnreadableAssignments {
            what,
            path: path.display().to_string(),
            source,
        }
    }
}
