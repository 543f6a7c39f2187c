use std::fmt;

use crate::interpreter::value::core::Value;

/// An abstract syntax tree (AST) node.
///
/// `Node` covers every construct of the language, statements and expressions
/// alike. Each variant carries the line it began on so runtime errors can
/// point back at the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A constant value (number, string, boolean, or a value bound by `with`).
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Array literal expression.
    Array {
        /// Elements of the array, evaluated left to right.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Binary operation.
    Binary {
        /// Left-hand side expression.
        left:  Box<Self>,
        /// The binary operator.
        op:    BinaryOperator,
        /// Right-hand side expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Unary operation.
    Unary {
        /// The unary operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Binding a name to the value of an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of a host function.
    FunctionCall {
        /// The function name.
        name:      String,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Call of a host method on a variable, as in `xs.add(4)`.
    ///
    /// The receiver is always a plain variable name.
    MethodCall {
        /// The variable holding the receiver.
        receiver:  String,
        /// The method name.
        method:    String,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `if` statement with an optional `else` branch.
    Conditional {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Executed when the condition is `true`.
        then_branch: Compound,
        /// Executed when the condition is `false`. An `else if` chain is an
        /// unscoped compound holding the nested conditional.
        else_branch: Option<Compound>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A nested block of statements.
    Compound(Compound),
    /// `for <iterator> in <iterable> { body }`
    Loop {
        /// The loop variable name.
        iterator: String,
        /// The expression producing the list to iterate.
        iterable: Box<Self>,
        /// The loop body.
        body:     Compound,
        /// Line number in the source code.
        line:     usize,
    },
    /// Inclusive integer range, as in `1..5`.
    Range {
        /// The first element.
        start: Box<Self>,
        /// The last element.
        end:   Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `break` or `return`.
    ExecutionFlag {
        /// Which flag is raised.
        flag: Flag,
        /// Line number in the source code.
        line: usize,
    },
}

impl Node {
    /// Moves the direct children of `self` into `out`, leaving `self` with no
    /// nested nodes.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Literal { .. } | Self::Variable { .. } | Self::ExecutionFlag { .. } => {},
            Self::Array { elements: nodes, .. }
            | Self::FunctionCall { arguments: nodes, .. }
            | Self::MethodCall { arguments: nodes, .. } => out.append(nodes),
            Self::Binary { left, right, .. }
            | Self::Range { start: left,
                            end: right,
                            .. } => {
                out.push(Self::detach(left));
                out.push(Self::detach(right));
            },
            Self::Unary { operand: child, .. } | Self::Assignment { value: child, .. } => out.push(Self::detach(child)),
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                out.push(Self::detach(condition));
                out.append(&mut then_branch.statements);
                if let Some(else_branch) = else_branch {
                    out.append(&mut else_branch.statements);
                }
            },
            Self::Compound(compound) => out.append(&mut compound.statements),
            Self::Loop { iterable, body, .. } => {
                out.push(Self::detach(iterable));
                out.append(&mut body.statements);
            },
        }
    }

    /// Replaces `node` with a leaf and returns the previous node.
    fn detach(node: &mut Self) -> Self {
        std::mem::replace(node, Self::ExecutionFlag { flag: Flag::Break,
                                                      line: 0 })
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sgl::ast::Node;
    ///
    /// let node = Node::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Array { line, .. }
            | Self::Variable { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Assignment { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::MethodCall { line, .. }
            | Self::Conditional { line, .. }
            | Self::Loop { line, .. }
            | Self::Range { line, .. }
            | Self::ExecutionFlag { line, .. } => *line,
            Self::Compound(compound) => compound.line,
        }
    }
}

/// An ordered block of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    /// The statements, executed in order.
    pub statements:    Vec<Node>,
    /// Whether executing the block opens a new scope frame.
    pub creates_scope: bool,
    /// Line number where the block begins.
    pub line:          usize,
}

/// A parsed program: one unscoped root block.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements.
    pub root: Compound,
}

impl Drop for Program {
    /// Takes the tree apart with an explicit work list. The default drop glue
    /// recurses once per level of nesting.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.root.statements);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, concatenation or append (`+`)
    Add,
    /// Subtraction or removal (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Equal to (`=`)
    Equal,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            ">" => Some(Self::Greater),
            "<" => Some(Self::Less),
            "=" => Some(Self::Equal),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// Control-flow statements without operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flag {
    /// `break`: ends the nearest enclosing loop.
    Break,
    /// `return`: ends the whole program.
    Halt,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Break => write!(f, "break"),
            Self::Halt => write!(f, "return"),
        }
    }
}
