use std::{cell::RefCell, fs, rc::Rc};

use sgl::{
    Error,
    config::InterpreterConfig,
    error::{RuntimeError, SyntaxError},
    interpreter::{host::registry::HostRegistry, memory::MAX_SCOPE_DEPTH},
    run_with_config,
};
use walkdir::WalkDir;

fn run_captured(src: &str, config: InterpreterConfig) -> Result<String, Error> {
    let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    let registry = HostRegistry::with_output(output.clone());
    run_with_config(src, registry, config)?;
    let bytes = output.borrow().clone();
    Ok(String::from_utf8(bytes).expect("print writes UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    match run_captured(src, InterpreterConfig::default()) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn run_error(src: &str) -> Error {
    match run_captured(src, InterpreterConfig::default()) {
        Ok(output) => panic!("Script succeeded but was expected to fail, printing {output:?}"),
        Err(e) => e,
    }
}

#[test]
fn scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "sgl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_captured(&source, InterpreterConfig::default()) {
            panic!("Script {path:?} failed:\n{source}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

#[test]
fn assignment_and_print() {
    assert_output("x = 3\ny = 4\nprint x + y", "7\n");
    assert_output("x = 1\nx = x + 1\nprint x", "2\n");
    assert_output("print 1, \"a\", true", "1 a true\n");
    assert_output("print", "\n");
}

#[test]
fn ranges_are_inclusive_in_both_directions() {
    assert_output("for i in 1..3 {\n  print i\n}", "1\n2\n3\n");
    assert_output("print 1..5\nprint 5..1", "[1, 2, 3, 4, 5]\n[5, 4, 3, 2, 1]\n");
    assert_output("n = 3\nprint 1..n\nprint n..1", "[1, 2, 3]\n[3, 2, 1]\n");
    assert_output("n = \"2\"\nprint n..4", "[2, 3, 4]\n");
    assert_output("print 1.3.\nprint 4.2", "[1, 2, 3]\n4.2\n");
}

#[test]
fn if_else_chains() {
    assert_output("if 1 < 2 {\n  print \"yes\"\n} else {\n  print \"no\"\n}", "yes\n");

    let chain = "x = 5
if x < 3 {
  print \"small\"
} else if x < 10 {
  print \"medium\"
} else {
  print \"large\"
}";
    assert_output(chain, "medium\n");

    assert_output("if false {\n  print 1\n}\n\nelse {\n  print 2\n}", "2\n");
    assert_output("if false {\n  print 1\n}\nprint 3", "3\n");
}

#[test]
fn list_operators_copy_their_operands() {
    assert_output("a = [1,2,3]\nb = a - 2\nprint b\nprint a", "[1, 3]\n[1, 2, 3]\n");
    assert_output("a = [1, 2]\nb = a + [3]\nc = a + 4\nprint a\nprint b\nprint c",
                  "[1, 2]\n[1, 2, 3]\n[1, 2, 4]\n");
    assert_output("print [1, 2, 1, 3] - [1, 3]", "[2, 1]\n");
    assert_output("print [] + []", "[]\n");
}

#[test]
fn operator_precedence() {
    assert_output("print 1 + 2 * 3\nprint 2 * 3 + 1", "7\n7\n");
    assert_output("print (1 + 2) * 3", "9\n");
    assert_output("print 1 < 2 and 3 > 2", "true\n");
    assert_output("print not false or false", "true\n");
    assert_output("print 1 + 1 = 2", "true\n");
    assert_output("print -2 * 3", "-6\n");
}

#[test]
fn same_rank_operators_group_to_the_right() {
    assert_output("print 10 - 4 - 3", "9\n");
    assert_output("print 2 * 6 / 3", "4\n");
}

#[test]
fn numbers_compare_with_tolerance() {
    assert_output("print 0.1 + 0.2 = 0.3", "true\n");
    assert_output("print 0.1 = 0.2", "false\n");
    assert_output("print [0.1 + 0.2, \"a\"] = [0.3, \"a\"]", "true\n");
}

#[test]
fn arithmetic_follows_ieee() {
    assert_output("print 7 / 2\nprint 7 % 4", "3.5\n3\n");
    assert_output("print 1 / 0", "inf\n");
}

#[test]
fn text_operators() {
    assert_output("print \"n=\" + 2", "n=2\n");
    assert_output("print 1 + \"x\"", "1x\n");
    assert_output("print \"banana\" - \"an\"", "ba\n");
    assert_output("print \"total: \" + [1, 2]", "total: [1, 2]\n");
}

#[test]
fn list_methods_change_the_list_in_place() {
    assert_output("xs = [1, 2]\nxs.add(3, 4)\nprint xs\nprint xs.count()\nprint xs.at(0)",
                  "[1, 2, 3, 4]\n4\n1\n");
    assert_output("xs = [1, 2, 3]\nxs.remove_at(0)\nxs.insert(0, 9)\nprint xs", "[9, 2, 3]\n");
    assert_output("xs = [1, 2]\nn = xs.count()\nxs.clear()\nprint n, xs", "2 []\n");
    assert_output("xs = [1, 2]\nprint xs.contains(5, 2)\nprint xs.contains_all(1, 5)", "true\nfalse\n");
}

#[test]
fn lists_are_shared_between_variables() {
    assert_output("xs = [1]\nys = xs\nys.add(2)\nprint xs", "[1, 2]\n");
}

#[test]
fn list_literals_are_fresh_each_time() {
    assert_output("for i in 1..2 {\n  xs = []\n  xs.add(i)\n  print xs\n}", "[1]\n[2]\n");
}

#[test]
fn loops_snapshot_their_list() {
    assert_output("xs = [1, 2]\nfor x in xs {\n  xs.add(x)\n}\nprint xs", "[1, 2, 1, 2]\n");
}

#[test]
fn loop_and_block_variables_stay_visible() {
    assert_output("for i in [1, 2] {\n  last = i * 10\n}\nprint i\nprint last", "2\n20\n");
    assert_output("if true {\n  y = 1\n}\nprint y", "1\n");
}

#[test]
fn break_ends_the_nearest_loop() {
    assert_output("for i in 1..5 {\n  if i = 3 {\n    break\n  }\n  print i\n}\nprint \"done\"",
                  "1\n2\ndone\n");

    let nested = "for i in 1..2 {
  for j in 1..3 {
    if j = 2 {
      break
    }
    print i + j
  }
}";
    assert_output(nested, "2\n3\n");

    // The iterator keeps the element the loop broke on.
    assert_output("for i in 1..3 {\n  break\n}\nprint i", "1\n");
}

#[test]
fn return_ends_the_program() {
    assert_output("print 1\nreturn\nprint 2", "1\n");
    assert_output("for i in 1..3 {\n  print i\n  return\n}\nprint \"after\"", "1\n");
    assert_output("if true {\n  if true {\n    return\n  }\n}\nprint 2", "");
    assert_output("print 1\nbreak\nprint 2", "1\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("// setup\nx = 1 // one\nprint x", "1\n");
}

#[test]
fn runtime_errors_carry_lines() {
    assert!(matches!(run_error("print y"),
                     Error::Runtime(RuntimeError::UnknownVariable { ref name, line: 1 }) if name == "y"));
    assert!(matches!(run_error("x = 1\n\ny = x + true"),
                     Error::Runtime(RuntimeError::InvalidOperands { line: 3, .. })));
    assert!(matches!(run_error("if 1 {\n  print 1\n}"),
                     Error::Runtime(RuntimeError::ExpectedBoolean { line: 1, .. })));
    assert!(matches!(run_error("x = 1\nfor i in x {\n}"),
                     Error::Runtime(RuntimeError::ExpectedList { line: 2, .. })));
    assert!(matches!(run_error("print 1 = \"1\""),
                     Error::Runtime(RuntimeError::InvalidOperands { .. })));
    assert!(matches!(run_error("print -\"a\""),
                     Error::Runtime(RuntimeError::InvalidOperand { .. })));
    assert!(matches!(run_error("print \"a\" * 2"),
                     Error::Runtime(RuntimeError::InvalidOperands { .. })));
    assert!(matches!(run_error("n = \"a\"\nprint n..3"),
                     Error::Runtime(RuntimeError::ExpectedNumber { .. })));
}

#[test]
fn calls_that_produce_nothing_cannot_be_assigned() {
    assert!(matches!(run_error("x = print 1"),
                     Error::Runtime(RuntimeError::MissingValue { line: 1 })));
}

#[test]
fn method_errors() {
    assert!(matches!(run_error("xs = [1]\nxs.shuffle()"),
                     Error::Runtime(RuntimeError::UnknownMethod { line: 2, .. })));
    assert!(matches!(run_error("xs = [1]\nxs.at()"),
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { .. })));
    assert!(matches!(run_error("xs = [1]\nprint xs.at(1)"),
                     Error::Runtime(RuntimeError::IndexOutOfBounds { index: 1, len: 1, .. })));
    assert!(matches!(run_error("x = 1\nx.count()"),
                     Error::Runtime(RuntimeError::ExpectedList { .. })));
    assert!(matches!(run_error("ys.count()"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn syntax_errors_carry_lines() {
    assert!(matches!(run_error("x = 1\ny = $"),
                     Error::Syntax(SyntaxError::UnknownSymbol { line: 2, .. })));
    assert!(matches!(run_error("print \"oops"),
                     Error::Syntax(SyntaxError::UnterminatedString { line: 1, .. })));
    assert!(matches!(run_error("x = [1, 2\nprint x"),
                     Error::Syntax(SyntaxError::UnterminatedArray { line: 1 })));
    assert!(matches!(run_error("x = [1, ]"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(run_error("x = (1"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(run_error("if true {\n  print 1\n"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(run_error("x 1"),
                     Error::Syntax(SyntaxError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(run_error("x = 1 2"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
    assert!(matches!(run_error("print 1.2.3"),
                     Error::Syntax(SyntaxError::InvalidRange { .. })));
    assert!(matches!(run_error("print 1..2..3"),
                     Error::Syntax(SyntaxError::InvalidRange { .. })));
    assert!(matches!(run_error("for i of [1] {\n}"),
                     Error::Syntax(SyntaxError::UnexpectedToken { .. })));
}

#[test]
fn statements_must_start_with_a_name_or_keyword() {
    assert!(matches!(run_error("5 + 1"),
                     Error::Syntax(SyntaxError::UnexpectedStatement { line: 1, .. })));
    assert!(matches!(run_error("x = 1\nelse {\n}"),
                     Error::Syntax(SyntaxError::UnexpectedStatement { line: 2, .. })));
}

#[test]
fn scope_depth_is_limited() {
    let nested = "if true {\n  if true {\n    if true {\n      print 1\n    }\n  }\n}";

    assert_eq!(run_captured(nested, InterpreterConfig::default()).unwrap(), "1\n");

    let shallow = InterpreterConfig::default().with_max_scope_depth(2);
    assert!(matches!(run_captured(nested, shallow),
                     Err(Error::Runtime(RuntimeError::ScopeDepthExceeded { limit: 2 }))));
}

fn nested_ifs(depth: usize) -> String {
    format!("{}print 1\n{}", "if true {\n".repeat(depth), "}\n".repeat(depth))
}

#[test]
fn deep_nesting_does_not_exhaust_the_stack() {
    assert_eq!(run_captured(&nested_ifs(20_000), InterpreterConfig::default()).unwrap(), "1\n");

    let parens = format!("print {}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(run_captured(&parens, InterpreterConfig::default()).unwrap(), "1\n");

    let negations = format!("print {}1", "- ".repeat(20_001));
    assert_eq!(run_captured(&negations, InterpreterConfig::default()).unwrap(), "-1\n");
}

#[test]
fn nesting_past_the_limit_is_a_runtime_error() {
    let config = InterpreterConfig::default().with_max_scope_depth(20_000);

    assert!(matches!(run_captured(&nested_ifs(20_001), config),
                     Err(Error::Runtime(RuntimeError::ScopeDepthExceeded { limit: 20_000 }))));
}

#[test]
#[ignore = "needs several hundred megabytes of stack in debug builds"]
fn nesting_past_the_default_limit_is_a_runtime_error() {
    assert_eq!(run_captured(&nested_ifs(MAX_SCOPE_DEPTH - 1), InterpreterConfig::default()).unwrap(),
               "1\n");
    assert!(matches!(run_captured(&nested_ifs(MAX_SCOPE_DEPTH + 1), InterpreterConfig::default()),
                     Err(Error::Runtime(RuntimeError::ScopeDepthExceeded { limit: MAX_SCOPE_DEPTH }))));
}

#[test]
fn early_exit_leaves_scopes_open_unless_configured() {
    let leaky = "for i in 1..3 {\n  if true {\n    break\n    print i\n  }\n}\n".repeat(3);
    let config = InterpreterConfig::default().with_max_scope_depth(2);

    assert!(matches!(run_captured(&leaky, config),
                     Err(Error::Runtime(RuntimeError::ScopeDepthExceeded { .. }))));

    let closing = config.with_close_scopes_on_early_exit(true);
    assert_eq!(run_captured(&leaky, closing).unwrap(), "");
}
