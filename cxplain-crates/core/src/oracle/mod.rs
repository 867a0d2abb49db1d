//! The consistency oracle is the only way in which the explanation algorithms learn anything
//! about the statements they manipulate.
//!
//! A [`ConsistencyOracle`] decides whether a [`StatementSet`] is jointly satisfiable. The
//! algorithms never look inside a statement; whatever technology decides satisfiability (a SAT
//! solver, a constraint solver, a lookup table in a test) lives behind this trait.
use std::fmt::Debug;

use crate::StatementSet;

/// Decides whether a set of statements is jointly satisfiable.
///
/// Implementations are expected to be a deterministic, pure function of the provided set: the
/// same set should always receive the same answer, irrespective of which sets were queried
/// before. The minimality of the explanations found by [`crate::CXPlain`] relies on this.
pub trait ConsistencyOracle<S> {
    /// Returns `Ok(true)` if the `statements` are consistent, and `Ok(false)` otherwise.
    ///
    /// If the oracle cannot decide (e.g. due to a time-out or a failing back-end), then an
    /// [`OracleError`] is returned; it is propagated to the caller of the explanation algorithm
    /// unchanged.
    fn is_consistent(&mut self, statements: &StatementSet<S>) -> Result<bool, OracleError>;
}

impl<S, Oracle: ConsistencyOracle<S> + ?Sized> ConsistencyOracle<S> for &mut Oracle {
    fn is_consistent(&mut self, statements: &StatementSet<S>) -> Result<bool, OracleError> {
        (**self).is_consistent(statements)
    }
}

impl<S, Oracle: ConsistencyOracle<S> + ?Sized> ConsistencyOracle<S> for Box<Oracle> {
    fn is_consistent(&mut self, statements: &StatementSet<S>) -> Result<bool, OracleError> {
        (**self).is_consistent(statements)
    }
}

/// A [`ConsistencyOracle`] which delegates to a closure.
///
/// # Example
/// ```rust
/// # use cxplain_core::oracle::ConsistencyOracle;
/// # use cxplain_core::oracle::FnOracle;
/// # use cxplain_core::statements;
/// // Statements are integers; a set is inconsistent if it contains both 1 and -1.
/// let mut oracle = FnOracle::new(|set: &cxplain_core::StatementSet<i32>| {
///     Ok(!(set.contains(&1) && set.contains(&-1)))
/// });
///
/// assert!(oracle.is_consistent(&statements![1, 2]).unwrap());
/// assert!(!oracle.is_consistent(&statements![1, 2, -1]).unwrap());
/// ```
pub struct FnOracle<F> {
    check: F,
}

impl<F> FnOracle<F> {
    pub fn new<S>(check: F) -> Self
    where
        F: FnMut(&StatementSet<S>) -> Result<bool, OracleError>,
    {
        FnOracle { check }
    }
}

impl<F> Debug for FnOracle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOracle").field("check", &"<closure>").finish()
    }
}

impl<S, F> ConsistencyOracle<S> for FnOracle<F>
where
    F: FnMut(&StatementSet<S>) -> Result<bool, OracleError>,
{
    fn is_consistent(&mut self, statements: &StatementSet<S>) -> Result<bool, OracleError> {
        (self.check)(statements)
    }
}

/// The ways in which a [`ConsistencyOracle`] can fail to answer a query.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("the consistency check was interrupted before it could reach a verdict")]
    Interrupted,

    #[error("the consistency check failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl OracleError {
    /// Wraps an arbitrary back-end error.
    pub fn backend(error: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        OracleError::Backend(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statements;

    fn query<Oracle: ConsistencyOracle<u8>>(mut oracle: Oracle, set: &StatementSet<u8>) -> bool {
        oracle
            .is_consistent(set)
            .expect("the test oracle never fails")
    }

    #[test]
    fn mutable_reference_forwards_to_oracle() {
        let mut calls = 0;
        {
            let mut oracle = FnOracle::new(|set: &StatementSet<u8>| {
                calls += 1;
                Ok(set.len() < 3)
            });

            assert!(query(&mut oracle, &statements![1, 2]));
            assert!(!query(&mut oracle, &statements![1, 2, 3]));
            assert!(query(Box::new(&mut oracle), &statements![4]));
        }
        assert_eq!(calls, 3);
    }

    #[test]
    fn backend_errors_keep_their_message() {
        let error = OracleError::backend("solver crashed");

        assert_eq!(
            error.to_string(),
            "the consistency check failed: solver crashed"
        );
    }
}
