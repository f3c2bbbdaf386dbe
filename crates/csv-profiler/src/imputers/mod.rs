//! Imputation methods for filling missing values.
//!
//! - `statistical`: Mean imputation for numeric columns, mode imputation
//!   for everything else

mod statistical;

pub use statistical::StatisticalImputer;
