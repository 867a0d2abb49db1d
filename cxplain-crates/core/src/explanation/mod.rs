//! The explanation algorithms: the divide-and-conquer minimal conflict search (CXP) and the
//! [`CXPlain`] driver which sets it up from a configuration, a requirement, a knowledge base and
//! a negated sub-configuration.
mod cxplain;
mod error;
mod explanation_statistics;
mod minimal_conflict_search;
mod problem;

pub use cxplain::CXPlain;
pub use error::ExplanationError;
pub use error::InputKind;
pub use explanation_statistics::ExplanationStatistics;
pub use problem::ExplanationProblem;
pub use problem::ExplanationProblemBuilder;
