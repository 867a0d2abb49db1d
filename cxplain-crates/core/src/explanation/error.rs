use std::fmt::Display;

use crate::oracle::OracleError;

/// The ways in which the search for an explanation can fail.
///
/// Note that not finding an explanation is *not* an error; in that case the search returns an
/// empty [`crate::StatementSet`].
#[derive(Debug, thiserror::Error)]
#[allow(
    variant_size_differences,
    reason = "returned once per search, never stored in bulk"
)]
pub enum ExplanationError {
    #[error("the {0} was not provided")]
    MissingInput(InputKind),

    #[error("the consistency oracle failed, more details: {0}")]
    Oracle(#[from] OracleError),

    #[error("the search was terminated before an explanation was found")]
    Terminated,
}

/// The four inputs of an [`crate::ExplanationProblem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    Requirement,
    KnowledgeBase,
    Configuration,
    NegatedSubConfiguration,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Requirement => write!(f, "requirement"),
            InputKind::KnowledgeBase => write!(f, "knowledge base"),
            InputKind::Configuration => write!(f, "configuration"),
            InputKind::NegatedSubConfiguration => write!(f, "negated sub-configuration"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_errors_are_wrapped_with_their_message() {
        let error = ExplanationError::from(OracleError::Interrupted);

        assert!(matches!(
            error,
            ExplanationError::Oracle(OracleError::Interrupted)
        ));
        assert_eq!(
            error.to_string(),
            "the consistency oracle failed, more details: the consistency check was interrupted \
             before it could reach a verdict"
        );
    }

    #[test]
    fn missing_inputs_name_the_input() {
        let error = ExplanationError::MissingInput(InputKind::NegatedSubConfiguration);

        assert_eq!(
            error.to_string(),
            "the negated sub-configuration was not provided"
        );
    }
}
