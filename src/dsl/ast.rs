//! Abstract Syntax Tree for the structogram DSL.
//!
//! `if` and its `else` are siblings in the same statement list rather than
//! one node with an optional branch. An [`Node::Else`] always directly follows
//! the [`Node::If`] it belongs to.

/// A parsed structogram: its name and top-level statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structogram {
    pub name: String,
    pub nodes: Vec<Node>,
}

/// One statement of a structogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Instruction { text: String },
    Call { text: String },
    If { condition: String, body: Vec<Node> },
    Else { body: Vec<Node> },
    While { condition: String, body: Vec<Node> },
    DoWhile { condition: String, body: Vec<Node> },
    /// Body holds zero or more `Case`s followed by exactly one `Default`.
    Switch { condition: String, body: Vec<Node> },
    Case { condition: String, body: Vec<Node> },
    Default { body: Vec<Node> },
}

impl Node {
    /// The DSL keyword that introduces this statement.
    pub fn keyword(&self) -> &'static str {
        match self {
            Node::Instruction { .. } => "instruction",
            Node::Call { .. } => "call",
            Node::If { .. } => "if",
            Node::Else { .. } => "else",
            Node::While { .. } => "while",
            Node::DoWhile { .. } => "dowhile",
            Node::Switch { .. } => "switch",
            Node::Case { .. } => "case",
            Node::Default { .. } => "default",
        }
    }

    /// The quoted argument: instruction/call text or a condition.
    /// Empty for `else` and `default`.
    pub fn value(&self) -> &str {
        match self {
            Node::Instruction { text } | Node::Call { text } => text,
            Node::If { condition, .. }
            | Node::While { condition, .. }
            | Node::DoWhile { condition, .. }
            | Node::Switch { condition, .. }
            | Node::Case { condition, .. } => condition,
            Node::Else { .. } | Node::Default { .. } => "",
        }
    }

    /// Child statements, or `None` for leaf nodes.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Instruction { .. } | Node::Call { .. } => None,
            Node::If { body, .. }
            | Node::Else { body }
            | Node::While { body, .. }
            | Node::DoWhile { body, .. }
            | Node::Switch { body, .. }
            | Node::Case { body, .. }
            | Node::Default { body } => Some(body),
        }
    }
}
