//! # shroud-eval
//!
//! Measures masking quality against labelled cases.
//!
//! - [`similarity`]: fuzzy value matching (exact, containment, Ratcliff/Obershelp).
//! - [`scorer`]: typed recall, type accuracy and false positives for one case.
//! - [`bundle`]: the JSON evaluation bundle format.
//! - [`runner`]: runs a bundle through an [`IMasker`](shroud_core::traits::IMasker) in parallel.

pub mod bundle;
pub mod runner;
pub mod scorer;
pub mod similarity;

pub use bundle::{EvalBundle, EvalCase, ExpectedTyped};
pub use runner::{run_suite, CaseReport, SuiteReport, SuiteRunner};
pub use scorer::{score_typed, ScoreReport};
pub use similarity::{match_score, sequence_ratio};
