use crate::{
    ast::{Compound, Node, Program},
    interpreter::value::core::Value,
    util::stack::ensure_sufficient_stack,
};

/// One entry of the rendered tree: a node, or a labelled block.
enum Branch<'a> {
    Node(&'a Node),
    Block(&'static str, &'a Compound),
}

impl<'a> Branch<'a> {
    fn label(&self) -> String {
        match *self {
            Self::Node(node) => node_label(node),
            Self::Block(name, compound) if compound.creates_scope => format!("{name} (scoped)"),
            Self::Block(name, _) => name.to_string(),
        }
    }

    fn children(&self) -> Vec<Self> {
        match *self {
            Self::Node(node) => node_children(node),
            Self::Block(_, compound) => compound.statements.iter().map(Branch::Node).collect(),
        }
    }
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Literal { value: Value::Text(text), .. } => format!("Literal \"{text}\""),
        Node::Literal { value, .. } => format!("Literal {value}"),
        Node::Array { .. } => "Array".to_string(),
        Node::Variable { name, .. } => format!("Variable {name}"),
        Node::Binary { op, .. } => format!("Binary {op}"),
        Node::Unary { op, .. } => format!("Unary {op}"),
        Node::Assignment { name, .. } => format!("Assignment {name}"),
        Node::FunctionCall { name, .. } => format!("Call {name}"),
        Node::MethodCall { receiver, method, .. } => format!("MethodCall {receiver}.{method}"),
        Node::Conditional { .. } => "If".to_string(),
        Node::Compound(compound) if compound.creates_scope => "Block (scoped)".to_string(),
        Node::Compound(_) => "Block".to_string(),
        Node::Loop { iterator, .. } => format!("For {iterator}"),
        Node::Range { .. } => "Range".to_string(),
        Node::ExecutionFlag { flag, .. } => flag.to_string(),
    }
}

fn node_children(node: &Node) -> Vec<Branch<'_>> {
    match node {
        Node::Literal { .. } | Node::Variable { .. } | Node::ExecutionFlag { .. } => Vec::new(),
        Node::Array { elements: nodes, .. }
        | Node::FunctionCall { arguments: nodes, .. }
        | Node::MethodCall { arguments: nodes, .. } => nodes.iter().map(Branch::Node).collect(),
        Node::Binary { left, right, .. }
        | Node::Range { start: left,
                        end: right,
                        .. } => vec![Branch::Node(left), Branch::Node(right)],
        Node::Unary { operand, .. } => vec![Branch::Node(operand)],
        Node::Assignment { value, .. } => vec![Branch::Node(value)],
        Node::Conditional { condition,
                            then_branch,
                            else_branch,
                            .. } => {
            let mut children = vec![Branch::Node(condition), Branch::Block("then", then_branch)];
            if let Some(else_branch) = else_branch {
                children.push(Branch::Block("else", else_branch));
            }
            children
        },
        Node::Compound(compound) => compound.statements.iter().map(Branch::Node).collect(),
        Node::Loop { iterable, body, .. } => vec![Branch::Node(iterable), Branch::Block("body", body)],
    }
}

fn write_branch(out: &mut String, branch: &Branch<'_>, prefix: &str, last: bool) {
    let connector = if last { "└─ " } else { "├─ " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&branch.label());
    out.push('\n');

    let child_prefix = format!("{prefix}{}", if last { "   " } else { "│  " });
    let children = branch.children();
    for (i, child) in children.iter().enumerate() {
        ensure_sufficient_stack(|| write_branch(out, child, &child_prefix, i + 1 == children.len()));
    }
}

/// Renders a program as an indented tree, one node per line.
///
/// # Example
/// ```
/// use sgl::{compile, interpreter::host::registry::HostRegistry, printer::render};
///
/// let mut registry = HostRegistry::default();
/// let program = compile("x = 1 + 2\nprint x", &mut registry).unwrap();
///
/// let expected = "\
/// Program
/// ├─ Assignment x
/// │  └─ Binary +
/// │     ├─ Literal 1
/// │     └─ Literal 2
/// └─ Call print
///    └─ Variable x
/// ";
/// assert_eq!(render(&program), expected);
/// ```
#[must_use]
pub fn render(program: &Program) -> String {
    let mut out = String::from("Program\n");
    let statements = &program.root.statements;
    for (i, statement) in statements.iter().enumerate() {
        write_branch(&mut out, &Branch::Node(statement), "", i + 1 == statements.len());
    }
    out
}
