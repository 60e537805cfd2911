//! Snipcheck - heuristic static review for code snippets.
//!
//! Snipcheck accepts a Python snippet, parses it into a language-neutral
//! syntax tree and derives structural metrics: function and class counts,
//! imported module names, loop count, and a shallow recursion flag. A
//! fixed, ordered rule set maps the metrics to improvement suggestions.
//! The analyzed code is never executed.
//!
//! # Architecture
//!
//! Data flows one way: text -> tree -> metrics -> suggestions -> report.
//!
//! - `parser`: `Parser` trait plus the tree-sitter Python implementation,
//!   lowering the CST into `syntax::SyntaxTree`
//! - `syntax`: tagged-variant tree with iterative traversal
//! - `analyze`: counting traversal, recursion detection, suggestion rules
//! - `review`: pipeline orchestration and the boundary error taxonomy
//! - `sentiment`: keyword-lexicon text analysis (no tree involved)
//! - `report`: pretty and JSON output
//!
//! Every traversal uses an explicit work stack, so adversarially deep
//! nesting cannot exhaust the call stack; callers bound input size at the
//! boundary (`cli::DEFAULT_MAX_BYTES`).

pub mod analyze;
pub mod cli;
pub mod parser;
pub mod report;
pub mod review;
pub mod sentiment;
pub mod syntax;

pub use analyze::{detect_recursion, count_structure, suggest, InputFacts, Metrics};
pub use parser::{Parser, PythonParser};
pub use review::{review, review_with, Report, ReviewError};
pub use sentiment::{analyze as analyze_sentiment, Sentiment, SentimentReport};
pub use syntax::{NodeId, NodeKind, ParseDiagnostic, SyntaxNode, SyntaxTree};
