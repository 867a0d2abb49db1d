//! A [`TerminationCondition`] is a condition which is polled by the explanation algorithms right
//! before every call to the consistency oracle, since an oracle call is the only point at which
//! the search can be interrupted without leaving its result ill-defined. It indicates when the
//! search should stop, even if no explanation has been found yet. The most common example would
//! be [`TimeBudget`], which gives the search a certain time budget to complete.

mod combinator;
mod indefinite;
mod oracle_call_budget;
mod time_budget;

pub use combinator::*;
pub use indefinite::*;
pub use oracle_call_budget::*;
pub use time_budget::*;

/// The central trait that defines a termination condition. A termination condition determines when
/// the search should give up looking for an explanation.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called after every completed call to the consistency oracle.
    fn oracle_call_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn oracle_call_has_been_made(&mut self) {
        if let Some(t) = self {
            t.oracle_call_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn oracle_call_has_been_made(&mut self) {
        (**self).oracle_call_has_been_made()
    }
}
