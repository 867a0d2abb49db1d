//! # CXPlain
//! Finds minimal explanations for why a configuration looks the way it does, using nothing but a
//! black-box [`oracle::ConsistencyOracle`].
//!
//! The crate contains two algorithms:
//! - The minimal conflict search (CXP), a divide-and-conquer search which, given a set of
//!   candidate statements and a background, finds a minimal subset of the candidates which is
//!   inconsistent with the background.
//! - [`CXPlain`], which uses CXP to explain a configuration: given a requirement, a knowledge base,
//!   a configuration and the negation of a part of that configuration (the *sub-configuration*),
//!   it finds a minimal set of statements which rules out any alternative to the
//!   sub-configuration.
//!
//! The algorithms never look inside a statement; any type which can be cloned, compared and
//! hashed can be used (see [`Statement`]). What a statement means is only known to the oracle.
//!
//! # Example
//! ```rust
//! # use cxplain_core::oracle::FnOracle;
//! # use cxplain_core::statements;
//! # use cxplain_core::termination::Indefinite;
//! # use cxplain_core::CXPlain;
//! # use cxplain_core::StatementSet;
//! // Any two of the statements 1, 2 and 3 are inconsistent with each other.
//! let oracle = FnOracle::new(|set: &StatementSet<u32>| {
//!     Ok(set.iter().filter(|statement| **statement <= 3).count() < 2)
//! });
//! let mut cxplain = CXPlain::new(oracle);
//!
//! let conflict =
//!     cxplain.find_minimal_conflict(&statements![4, 3, 5, 1], &statements![], &mut Indefinite)?;
//!
//! assert_eq!(conflict, statements![3, 1]);
//! # Ok::<(), cxplain_core::ExplanationError>(())
//! ```
pub mod asserts;
mod basic_types;
pub mod containers;
mod explanation;
pub mod oracle;
pub mod statistics;
pub mod termination;

pub use basic_types::AccumulatedTime;
pub use basic_types::Statement;
pub use basic_types::StatementSet;
pub use convert_case;
pub use explanation::CXPlain;
pub use explanation::ExplanationError;
pub use explanation::ExplanationProblem;
pub use explanation::ExplanationProblemBuilder;
pub use explanation::ExplanationStatistics;
pub use explanation::InputKind;
