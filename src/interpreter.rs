/// The evaluator module executes AST nodes.
///
/// The evaluator walks the tree with a single explicit value stack, stores
/// variables through the memory manager and dispatches calls to the host
/// registry. Control flow is reported upwards as signals rather than flags.
///
/// # Responsibilities
/// - Evaluates expressions and executes statements.
/// - Implements the dynamic operator semantics for numbers, text and lists.
/// - Reports runtime errors with the line of the failing node.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens
/// with one token of lookahead. Each token carries its kind, its text and the
/// line it began on.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Distinguishes keywords, operator keywords and type names from
///   identifiers.
/// - Reports unknown characters and unterminated strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Parsing is host aware: whether an identifier at the start of a statement
/// is a call or an assignment depends on the functions registered with the
/// host, and `with` declarations consume queued host arguments.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Implements operator precedence by rank climbing.
/// - Validates the grammar, reporting errors with line information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, text, booleans, shared lists and
///   opaque host objects.
/// - Implements conversions, rendering and structural equality.
pub mod value;
/// The memory module stores variables.
///
/// A single name to slot mapping with a stack of scope frames and the
/// reference counting operations that go with it.
pub mod memory;
/// The host module connects scripts to the embedding application.
///
/// Holds the registered functions and methods, the standard library, and the
/// queue of arguments bound by `with` declarations.
pub mod host;
