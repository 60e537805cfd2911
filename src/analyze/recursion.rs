//! Shallow, name-based recursion detection.
//!
//! For every function definition anywhere in the tree, its own subtree is
//! scanned for call nodes whose callee is the same bare name. Any hit sets
//! one tree-wide flag; the result is never attributed to a specific
//! function.
//!
//! This heuristic is intentionally coarse and its envelope is accepted
//! behavior, not a bug backlog:
//! - only direct, same-name, bare-name self-calls are detected;
//! - mutual recursion (A calls B, B calls A) is never detected;
//! - calls through aliases, attributes, or higher-order dispatch are
//!   never detected;
//! - a nested function sharing its name with an unrelated outer one can
//!   false-positive.

use crate::syntax::{NodeKind, SyntaxTree};

/// True if any function definition in the tree calls itself by bare name.
pub fn detect_recursion(tree: &SyntaxTree) -> bool {
    for id in tree.walk() {
        let name = match &tree.node(id).kind {
            NodeKind::FunctionDef { name } if !name.is_empty() => name,
            _ => continue,
        };
        // Inner scan covers the whole subtree, nested bodies included.
        for inner in tree.walk_from(id) {
            if let NodeKind::Call {
                callee: Some(callee),
            } = &tree.node(inner).kind
            {
                if callee == name {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parser, PythonParser};

    fn has_recursion(source: &str) -> bool {
        let tree = PythonParser::new().parse(source).expect("should parse");
        detect_recursion(&tree)
    }

    #[test]
    fn test_direct_self_call() {
        assert!(has_recursion(
            "def fact(n):\n    if n <= 1:\n        return 1\n    return fact(n - 1)\n"
        ));
    }

    #[test]
    fn test_different_name_is_not_recursion() {
        assert!(!has_recursion(
            "def fact(n):\n    return fact2(n - 1)\n\ndef fact2(n):\n    return 1\n"
        ));
    }

    #[test]
    fn test_mutual_recursion_is_not_detected() {
        assert!(!has_recursion(
            "def a(n):\n    return b(n)\n\ndef b(n):\n    return a(n)\n"
        ));
    }

    #[test]
    fn test_attribute_call_is_not_detected() {
        assert!(!has_recursion("def f(self):\n    return self.f()\n"));
    }

    #[test]
    fn test_nested_same_name_false_positive_is_kept() {
        // The call targets the nested f, not the outer one, but the scan
        // matches by name alone. Accepted envelope.
        assert!(has_recursion(
            "def f():\n    def f():\n        pass\n    f()\n"
        ));
    }

    #[test]
    fn test_nested_function_self_call() {
        assert!(has_recursion(
            "def outer():\n    def inner(n):\n        return inner(n - 1)\n    return inner(3)\n"
        ));
    }

    #[test]
    fn test_no_functions_no_recursion() {
        assert!(!has_recursion("x = f(1)\n"));
    }
}
