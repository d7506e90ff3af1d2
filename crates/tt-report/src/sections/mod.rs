//! Report sections.
//!
//! Each section is a plain serde struct; the verifier populates them and
//! the generator renders them. Sections never compute anything.

pub mod comparisons;
pub mod groups;
pub mod overview;

pub use comparisons::ComparisonRow;
pub use groups::GroupTally;
pub use overview::OverviewSection;
