//! Single-pass structural counting.

use std::collections::BTreeSet;

use crate::syntax::{NodeKind, SyntaxTree};

/// Raw counts from one traversal, before the recursion flag is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureCounts {
    pub function_count: usize,
    pub class_count: usize,
    pub loop_count: usize,
    pub import_names: BTreeSet<String>,
}

/// Count definitions, loops and import references in one traversal.
///
/// Every node is visited exactly once (the tree walker is an explicit
/// work stack, see `syntax::Walk`). Direct imports record the imported
/// module name; from-imports record the module identifier only, and a
/// bare relative import with no module contributes nothing. Empty names
/// are discarded.
pub fn count_structure(tree: &SyntaxTree) -> StructureCounts {
    let mut counts = StructureCounts::default();

    for id in tree.walk() {
        match &tree.node(id).kind {
            NodeKind::FunctionDef { .. } => counts.function_count += 1,
            NodeKind::ClassDef { .. } => counts.class_count += 1,
            NodeKind::Loop => counts.loop_count += 1,
            NodeKind::Import { name } => {
                if !name.is_empty() {
                    counts.import_names.insert(name.clone());
                }
            }
            NodeKind::FromImport {
                module: Some(module),
            } => {
                if !module.is_empty() {
                    counts.import_names.insert(module.clone());
                }
            }
            NodeKind::FromImport { module: None } => {}
            NodeKind::Call { .. } | NodeKind::Name | NodeKind::Other => {}
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parser, PythonParser};

    fn counts(source: &str) -> StructureCounts {
        let tree = PythonParser::new().parse(source).expect("should parse");
        count_structure(&tree)
    }

    #[test]
    fn test_counts_nested_definitions() {
        let c = counts(
            "class A:\n    def m(self):\n        def inner():\n            pass\n\nclass B:\n    pass\n",
        );
        assert_eq!(c.function_count, 2, "method and nested function");
        assert_eq!(c.class_count, 2);
    }

    #[test]
    fn test_counts_loops_at_any_depth() {
        let c = counts(
            "for i in a:\n    while True:\n        pass\nfor j in b:\n    pass\n",
        );
        assert_eq!(c.loop_count, 3);
    }

    #[test]
    fn test_import_dedup() {
        let c = counts("import os\nimport os\nfrom os import path\n");
        assert_eq!(c.import_names.len(), 1);
        assert!(c.import_names.contains("os"));
    }

    #[test]
    fn test_relative_import_without_module_is_discarded() {
        let c = counts("from . import sibling\n");
        assert!(c.import_names.is_empty());
    }

    #[test]
    fn test_from_import_records_module_not_members() {
        let c = counts("from typing import List, Optional\n");
        assert_eq!(c.import_names.len(), 1);
        assert!(c.import_names.contains("typing"));
        assert!(!c.import_names.contains("List"));
    }

    #[test]
    fn test_empty_module_counts_nothing() {
        let c = counts("x = 1\n");
        assert_eq!(c, StructureCounts::default());
    }
}
