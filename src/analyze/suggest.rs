//! Rule-based suggestion derivation.
//!
//! A fixed, ordered table of independent rules is evaluated against the
//! already-computed metrics plus two bare facts about the raw input. Rules
//! never short-circuit each other and never mutate metrics; each fires at
//! most once, so duplicate suggestions are impossible and output order is
//! declaration order.

use super::Metrics;

/// Facts about the raw input text that the rules consult directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFacts {
    /// Line count with Python `str.split('\n')` semantics: a trailing
    /// newline counts as one more (empty) line.
    pub line_count: usize,
    /// Character count (not bytes).
    pub char_len: usize,
}

impl InputFacts {
    pub fn of(code: &str) -> Self {
        Self {
            line_count: code.split('\n').count(),
            char_len: code.chars().count(),
        }
    }
}

struct Rule {
    applies: fn(&Metrics, &InputFacts) -> bool,
    message: &'static str,
}

static RULES: &[Rule] = &[
    Rule {
        applies: |m, _| m.loop_count > 1,
        message: "Nested loops detected. Check for O(n^2) complexity.",
    },
    Rule {
        applies: |m, _| m.has_recursion,
        message: "Recursion detected. Validate termination conditions.",
    },
    Rule {
        applies: |m, f| m.function_count == 0 && f.line_count > 15,
        message: "Consider extracting logic into functions.",
    },
    Rule {
        applies: |m, f| m.import_names.is_empty() && f.char_len > 100,
        message: "No imports detected. Is this a standalone script?",
    },
];

/// Evaluate every rule, collecting the messages of those that hold.
pub fn suggest(metrics: &Metrics, facts: &InputFacts) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(metrics, facts))
        .map(|rule| rule.message.to_string())
        .collect()
}
