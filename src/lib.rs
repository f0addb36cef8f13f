//! Argtrust computes the semantics of abstract argumentation frameworks.
//!
//! The [`aa`] module defines the frameworks, the sets of arguments and the acceptability tests,
//! and the [`solvers`] module computes the extensions of the complete, grounded, preferred, semi-stable and stable semantics.
//! Frameworks can be read and written by the objects of the [`io`] module,
//! built from knowledge bases using the [`kb`] module,
//! and the [`trust`] module computes how much agents of a social network trust each other.
//!
//! # Example
//!
//! ```
//! # use argtrust::aa::AAFramework;
//! # use argtrust::solvers::{ExtensionEnumerator, PreferredSemanticsSolver};
//! let af = AAFramework::new(["A", "B", "C"], [("A", "B"), ("B", "A"), ("B", "C")]).unwrap();
//! let extensions = PreferredSemanticsSolver::new(&af).enumerate_extensions().unwrap();
//! assert_eq!(2, extensions.len());
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod kb;

pub mod solvers;

pub mod trust;

pub mod utils;
