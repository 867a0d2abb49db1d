//! # CXPlain
//! CXPlain explains product configurations: given a configuration which was produced for a user
//! requirement under a knowledge base, it finds a minimal set of statements (assignments of the
//! configuration, the requirement, and constraints of the knowledge base) which rules out any
//! alternative to a chosen part of the configuration.
//!
//! This crate bundles the explanation algorithms ([`cxplain_core`], re-exported at the root) and
//! the knowledge bases with their SAT-based consistency oracle ([`kb`]).
//!
//! # Explaining a feature model configuration
//! ```rust
//! # use cxplain_solver::kb::parse_assignments;
//! # use cxplain_solver::kb::survey_feature_model;
//! # use cxplain_solver::kb::CausalExplanationModel;
//! # use cxplain_solver::kb::SatOracle;
//! # use cxplain_solver::termination::Indefinite;
//! # use cxplain_solver::CXPlain;
//! // Why does the configuration not contain `multiplemedia`?
//! let model = CausalExplanationModel::new(
//!     survey_feature_model().into_knowledge_base()?,
//!     &parse_assignments("multiplemedia=false")?,
//!     &parse_assignments("ABtesting=true")?,
//!     &parse_assignments(
//!         "survey=true,pay=true,license=true,nonlicense=false,ABtesting=true,statistics=true,\
//!          qa=true,multiplechoice=true,multiplemedia=false",
//!     )?,
//! )?;
//!
//! let mut cxplain = CXPlain::new(SatOracle::new(model.knowledge_base()));
//! let explanation = cxplain.find_explanation(&model.problem(), &mut Indefinite)?;
//!
//! // Because it was configured that way.
//! assert_eq!(model.describe(&explanation), "[multiplemedia=false]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub use cxplain_core::*;
pub use cxplain_kb as kb;
