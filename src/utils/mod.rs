//! Miscellaneous components used in the library.

mod grounded_extension_computer;
pub use grounded_extension_computer::grounded_extension;

mod labelling;
pub use labelling::Label;
pub use labelling::Labelling;

mod search_budget;
pub(crate) use search_budget::SearchMonitor;
pub use search_budget::Interrupter;
pub use search_budget::SearchBudget;

mod subset_enumerator;
pub use subset_enumerator::EnumerationOrder;
pub use subset_enumerator::SubsetEnumerator;
