//! Solvers dedicated to the semantics of Abstract Argumentation frameworks.
//!
//! All the solvers implement [`ExtensionEnumerator`], which gives them the other solver traits of this module.
//! The exhaustive searches can be bounded by a [`SearchBudget`](crate::utils::SearchBudget).

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod semi_stable_semantics_solver;
pub use semi_stable_semantics_solver::SemiStableSemanticsSolver;

mod specs;
pub use specs::new_extension_enumerator;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
