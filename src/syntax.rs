//! Language-neutral syntax tree for snippet analysis.
//!
//! The parser lowers a concrete parse tree into this tagged-variant form so
//! that every analysis pass can traverse it with exhaustive matching instead
//! of grammar-specific node kinds. Nodes live in a flat arena indexed by
//! `NodeId`; children are index lists, which keeps traversal iterative and
//! the whole tree a single allocation arena owned by one request.

use std::fmt;

/// Index of a node within its `SyntaxTree` arena.
pub type NodeId = usize;

/// The structural category of a syntax node.
///
/// Only the kinds the analyses care about are distinguished; everything else
/// collapses to `Other` with its children preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A function definition with its declared name.
    FunctionDef { name: String },
    /// A class definition with its declared name.
    ClassDef { name: String },
    /// A for-style or while-style loop. No further distinction is made.
    Loop,
    /// A direct import of a (possibly dotted) module name.
    Import { name: String },
    /// A from-import. `module` is None for bare relative imports
    /// (`from . import x`).
    FromImport { module: Option<String> },
    /// A call expression. `callee` is Some only when the callee is a bare
    /// identifier, not an attribute or computed expression.
    Call { callee: Option<String> },
    /// A bare identifier reference.
    Name,
    /// Any other construct; children still traversed.
    Other,
}

/// A single node: its kind plus arena indices of its children.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

/// Arena-backed syntax tree. Node 0 is always the root.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    /// Create a tree containing only a root node of the given kind.
    pub fn new(root_kind: NodeKind) -> Self {
        Self {
            nodes: vec![SyntaxNode {
                kind: root_kind,
                children: Vec::new(),
            }],
        }
    }

    /// Append a new node under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SyntaxNode {
            kind,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order traversal of the whole tree.
    pub fn walk(&self) -> Walk<'_> {
        self.walk_from(self.root())
    }

    /// Pre-order traversal of the subtree rooted at `start` (inclusive).
    ///
    /// Uses an explicit work stack so arbitrarily deep trees cannot
    /// overflow the call stack.
    pub fn walk_from(&self, start: NodeId) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![start],
        }
    }
}

/// Iterative pre-order walker over a `SyntaxTree`.
pub struct Walk<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Reverse push keeps children in source order.
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}

/// A structured parse failure: position plus the parser's message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// Line of the first offending node (1-indexed).
    pub line: usize,
    /// Column of the first offending node (1-indexed).
    pub column: usize,
    /// The parser's diagnostic text, preserved verbatim for callers.
    pub message: String,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.message)
    }
}
