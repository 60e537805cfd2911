//! Structural analysis over the syntax tree.
//!
//! Each pass is a pure function over an immutable `SyntaxTree`; nothing
//! here mutates another pass's output. `Metrics::collect` runs the full
//! set: one counting traversal plus the recursion scan.

mod recursion;
mod structure;
mod suggest;

pub use recursion::detect_recursion;
pub use structure::{count_structure, StructureCounts};
pub use suggest::{suggest, InputFacts};

use std::collections::BTreeSet;

use crate::syntax::SyntaxTree;

/// Structural metrics derived from one snippet's syntax tree.
///
/// Immutable once built; never reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// Function definitions anywhere in the tree, nested included.
    pub function_count: usize,
    /// Class definitions anywhere in the tree.
    pub class_count: usize,
    /// Deduplicated non-empty imported module names. Iteration order is a
    /// BTreeSet artifact; callers must not rely on it.
    pub import_names: BTreeSet<String>,
    /// Loop nodes at any nesting depth, for-style and while-style alike.
    pub loop_count: usize,
    /// True if any function anywhere calls itself by bare name.
    pub has_recursion: bool,
}

impl Metrics {
    /// Run all analysis passes over a tree.
    pub fn collect(tree: &SyntaxTree) -> Self {
        let counts = count_structure(tree);
        let has_recursion = detect_recursion(tree);
        Self {
            function_count: counts.function_count,
            class_count: counts.class_count,
            import_names: counts.import_names,
            loop_count: counts.loop_count,
            has_recursion,
        }
    }

    /// The derived complexity flag: more than one loop, or any recursion.
    pub fn complexity_warning(&self) -> bool {
        self.loop_count > 1 || self.has_recursion
    }
}
