//! Human-facing view of a stunting risk result: the most likely level, how
//! confidently it wins, and what to do next. No probabilities are computed
//! here beyond reading the scorer's distribution.

pub mod advice;
pub mod assessment;
pub mod interpret;

pub use advice::advice_for;
pub use assessment::{Assessment, ReportOptions};
pub use interpret::{interpret, Interpretation, Strength};
