//! This module contains the main material used to define Abstract Argumentation.

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;

mod acceptability;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;

mod error;
pub use error::AAError;
pub use error::AbortReason;

mod problem;
pub use problem::read_problem_string;
pub use problem::Query;
pub use problem::Semantics;

mod subset;
pub use subset::ArgumentSubset;
pub use subset::ExtensionSet;
