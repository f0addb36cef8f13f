//! Construction of arguments from knowledge bases made of facts and inference rules.
//!
//! The arguments built from a [`KnowledgeBase`] can be gathered in an [`AAFramework`](crate::aa::AAFramework)
//! in which arguments with complementary conclusions attack each other.

mod knowledge_base;
pub use knowledge_base::KnowledgeBase;
pub use knowledge_base::StructuredArgument;

mod literal;
pub use literal::Literal;
pub use literal::Rule;
