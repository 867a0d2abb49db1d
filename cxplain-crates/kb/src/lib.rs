//! # CXPlain knowledge bases
//! Propositional knowledge bases whose constraints serve as the statements of
//! [`cxplain_core::CXPlain`], together with a [`SatOracle`] deciding their consistency.
//!
//! The typical flow is:
//! 1. create a [`KnowledgeBase`], either directly, from a [`FeatureModel`], or from one of the
//!    [`BuiltinKnowledgeBase`]s;
//! 2. parse the requirement, the configuration and the sub-configuration with
//!    [`parse_assignments`];
//! 3. build a [`CausalExplanationModel`], which translates these into constraints;
//! 4. find an explanation for its [`CausalExplanationModel::problem`] with a [`SatOracle`].
//!
//! # Example
//! ```rust
//! # use cxplain_core::termination::Indefinite;
//! # use cxplain_core::CXPlain;
//! # use cxplain_kb::car_configuration;
//! # use cxplain_kb::parse_assignments;
//! # use cxplain_kb::CausalExplanationModel;
//! # use cxplain_kb::SatOracle;
//! let model = CausalExplanationModel::new(
//!     car_configuration()?,
//!     &parse_assignments("easy-parking=y")?,
//!     &parse_assignments("biz-park=y,rec-park=y")?,
//!     &parse_assignments(
//!         "biz-park=y,rec-park=y,video=y,sensor=n,GSM-radio=y,easy-parking=y,free-com=y",
//!     )?,
//! )?;
//!
//! let mut cxplain = CXPlain::new(SatOracle::new(model.knowledge_base()));
//! let explanation = cxplain.find_explanation(&model.problem(), &mut Indefinite)?;
//!
//! assert_eq!(
//!     model.describe(&explanation),
//!     "[rec-park=y [copied], (video or sensor) <-> easy-parking, rec-park <-> video]"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
mod assignment;
mod basic_types;
mod causal_model;
mod feature_model;
mod knowledge_base;
mod knowledge_bases;
mod negation;
mod sat;
mod sub_configuration;

pub use assignment::parse_assignments;
pub use assignment::Assignment;
pub use assignment::ParseAssignmentError;
pub use basic_types::Random;
pub use causal_model::CausalExplanationModel;
pub use feature_model::FeatureModel;
pub use feature_model::Relationship;
pub use knowledge_base::*;
pub use knowledge_bases::car_configuration;
pub use knowledge_bases::survey_feature_model;
pub use knowledge_bases::BuiltinKnowledgeBase;
pub use negation::negate_assignments;
pub use rand;
pub use sat::SatOracle;
pub use sat::SatStatistics;
pub use sub_configuration::SubConfigurationGenerator;
