//! The review pipeline: text -> tree -> metrics -> suggestions -> report.
//!
//! Data flows one way and each stage's output is immutable. The pipeline is
//! a single stateless pass per request: no shared state, no I/O, no clock,
//! so concurrent reviews need no coordination and retries are pointless
//! (identical input always yields an identical report or diagnostic).

use serde::Serialize;
use thiserror::Error;

use crate::analyze::{suggest, InputFacts, Metrics};
use crate::parser::{Parser, PythonParser};
use crate::syntax::ParseDiagnostic;

/// The immutable outcome of one review.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub function_count: usize,
    pub class_count: usize,
    /// Set contents as a sorted vector. Sorting is a serialization
    /// determinism measure, not a promise of order to callers.
    pub imports: Vec<String>,
    pub complexity_warning: bool,
    /// Suggestions in rule-declaration order; each rule fires at most once.
    pub suggestions: Vec<String>,
}

impl Report {
    /// Merge metrics and suggestions into the final report.
    ///
    /// Pure assembly: the only derivation is the complexity flag, which is
    /// `loop_count > 1 || has_recursion`.
    pub fn assemble(metrics: Metrics, suggestions: Vec<String>) -> Self {
        let complexity_warning = metrics.complexity_warning();
        Self {
            function_count: metrics.function_count,
            class_count: metrics.class_count,
            imports: metrics.import_names.into_iter().collect(),
            complexity_warning,
            suggestions,
        }
    }
}

/// Boundary error taxonomy for the review pipeline.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Empty or absent input. Recovered at the boundary; no tree is built.
    #[error("no code provided")]
    MissingInput,
    /// The parser rejected the text. The diagnostic text is preserved
    /// verbatim so callers can locate the problem.
    #[error("syntax error: {0}")]
    Syntax(ParseDiagnostic),
    /// An unexpected fault inside traversal or rule evaluation. Distinct
    /// from the two expected kinds; maps to a server-error class.
    #[error("internal analysis failure: {0}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ReviewError {
    fn from(e: anyhow::Error) -> Self {
        ReviewError::Internal(e)
    }
}

impl ReviewError {
    /// Whether this error is the caller's fault (client-error class).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ReviewError::MissingInput | ReviewError::Syntax(_))
    }
}

/// Review a snippet with the default Python parser.
pub fn review(code: &str) -> Result<Report, ReviewError> {
    review_with(&PythonParser::new(), code)
}

/// Review a snippet with an explicit parser implementation.
pub fn review_with(parser: &dyn Parser, code: &str) -> Result<Report, ReviewError> {
    if code.is_empty() {
        return Err(ReviewError::MissingInput);
    }

    let tree = parser.parse(code).map_err(ReviewError::Syntax)?;
    let metrics = Metrics::collect(&tree);
    let facts = InputFacts::of(code);
    let suggestions = suggest(&metrics, &facts);

    Ok(Report::assemble(metrics, suggestions))
}
