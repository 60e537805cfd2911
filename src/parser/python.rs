//! Python parsing via tree-sitter, lowered to the language-neutral tree.
//!
//! Tree-sitter is error-tolerant: malformed input still yields a tree, with
//! ERROR/MISSING nodes marking the damage. `PythonParser` scans for the
//! first such node and turns it into a `ParseDiagnostic` instead of handing
//! a broken tree to the analyses.

use once_cell::sync::Lazy;
use tree_sitter::{Language, Node, Parser as TsParser};

use super::Parser;
use crate::syntax::{NodeId, NodeKind, ParseDiagnostic, SyntaxTree};

static LANGUAGE: Lazy<Language> = Lazy::new(|| tree_sitter_python::LANGUAGE.into());

/// Longest snippet of offending text quoted in a diagnostic.
const DIAG_SNIPPET_MAX: usize = 40;

/// Tree-sitter backed Python parser.
///
/// `tree_sitter::Parser` is not Sync, so a fresh one is created per parse;
/// the grammar itself is shared via `LANGUAGE`.
#[derive(Debug, Default)]
pub struct PythonParser;

impl PythonParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for PythonParser {
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseDiagnostic> {
        let mut parser = TsParser::new();
        parser
            .set_language(&LANGUAGE)
            .map_err(|e| ParseDiagnostic {
                line: 1,
                column: 1,
                message: format!("grammar unavailable: {}", e),
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| ParseDiagnostic {
            line: 1,
            column: 1,
            message: "parser produced no tree".to_string(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(first_error(root, source));
        }

        Ok(lower(root, source.as_bytes()))
    }

    fn language(&self) -> &'static str {
        "python"
    }
}

/// Locate the first ERROR or MISSING node in document order.
///
/// Iterative so a pathologically deep broken tree cannot overflow the
/// call stack.
fn first_error(root: Node, source: &str) -> ParseDiagnostic {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                let text = node.utf8_text(source.as_bytes()).unwrap_or("");
                let snippet: String = text
                    .lines()
                    .next()
                    .unwrap_or("")
                    .chars()
                    .take(DIAG_SNIPPET_MAX)
                    .collect();
                if snippet.trim().is_empty() {
                    "invalid syntax".to_string()
                } else {
                    format!("invalid syntax near '{}'", snippet.trim())
                }
            };
            return ParseDiagnostic {
                line: pos.row + 1,
                column: pos.column + 1,
                message,
            };
        }
        // Anonymous children included: missing tokens are often anonymous.
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    ParseDiagnostic {
        line: 1,
        column: 1,
        message: "invalid syntax".to_string(),
    }
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Lower a tree-sitter CST into the tagged-variant `SyntaxTree`.
///
/// Iterative: an explicit stack of (CST node, arena parent) pairs replaces
/// recursion, so nesting depth is bounded only by heap.
fn lower(root: Node, source: &[u8]) -> SyntaxTree {
    let mut tree = SyntaxTree::new(NodeKind::Other);
    let mut stack: Vec<(Node, NodeId)> = Vec::new();
    push_named_children(&mut stack, root, tree.root());

    while let Some((ts, parent)) = stack.pop() {
        match ts.kind() {
            "function_definition" => {
                let name = field_text(ts, "name", source);
                let id = tree.add_child(parent, NodeKind::FunctionDef { name });
                push_named_children(&mut stack, ts, id);
            }
            "class_definition" => {
                let name = field_text(ts, "name", source);
                let id = tree.add_child(parent, NodeKind::ClassDef { name });
                push_named_children(&mut stack, ts, id);
            }
            "for_statement" | "while_statement" => {
                let id = tree.add_child(parent, NodeKind::Loop);
                push_named_children(&mut stack, ts, id);
            }
            "import_statement" => {
                // `import a.b, c as d` records a.b and c: the real module
                // names, never the alias.
                let id = tree.add_child(parent, NodeKind::Other);
                for i in 0..ts.named_child_count() {
                    if let Some(child) = ts.named_child(i) {
                        let name = match child.kind() {
                            "dotted_name" => node_text(child, source).to_string(),
                            "aliased_import" => field_text(child, "name", source),
                            _ => continue,
                        };
                        tree.add_child(id, NodeKind::Import { name });
                    }
                }
            }
            "import_from_statement" => {
                let module = from_import_module(ts, source);
                tree.add_child(parent, NodeKind::FromImport { module });
            }
            "call" => {
                let callee = ts
                    .child_by_field_name("function")
                    .filter(|f| f.kind() == "identifier")
                    .map(|f| node_text(f, source).to_string());
                let id = tree.add_child(parent, NodeKind::Call { callee });
                push_named_children(&mut stack, ts, id);
            }
            "identifier" => {
                tree.add_child(parent, NodeKind::Name);
            }
            _ => {
                let id = tree.add_child(parent, NodeKind::Other);
                push_named_children(&mut stack, ts, id);
            }
        }
    }

    tree
}

/// Module identifier of a from-import, if any.
///
/// `from a.b import x` -> Some("a.b"); `from .m import x` -> Some("m");
/// `from . import x` -> None (no explicit module to record).
fn from_import_module(ts: Node, source: &[u8]) -> Option<String> {
    let module_node = ts.child_by_field_name("module_name")?;
    match module_node.kind() {
        "dotted_name" => Some(node_text(module_node, source).to_string()),
        "relative_import" => {
            for i in 0..module_node.named_child_count() {
                if let Some(child) = module_node.named_child(i) {
                    if child.kind() == "dotted_name" {
                        return Some(node_text(child, source).to_string());
                    }
                }
            }
            None
        }
        _ => None,
    }
}

fn field_text(ts: Node, field: &str, source: &[u8]) -> String {
    ts.child_by_field_name(field)
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

/// Push `ts`'s named children, reversed so pops come out in source order.
fn push_named_children<'a>(stack: &mut Vec<(Node<'a>, NodeId)>, ts: Node<'a>, parent: NodeId) {
    for i in (0..ts.named_child_count()).rev() {
        if let Some(child) = ts.named_child(i) {
            stack.push((child, parent));
        }
    }
}
