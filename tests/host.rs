use std::{cell::RefCell, rc::Rc};

use sgl::{
    Error,
    compile,
    config::InterpreterConfig,
    error::{ContextError, RuntimeError, SyntaxError},
    interpreter::{
        evaluator::core::Interpreter,
        host::{registry::HostRegistry, stdlib::list},
        value::{core::Value, host_object::HostObject},
    },
    run,
};

type Output = Rc<RefCell<Vec<u8>>>;

fn captured_registry() -> (HostRegistry, Output) {
    let output = Rc::new(RefCell::new(Vec::<u8>::new()));
    (HostRegistry::with_output(output.clone()), output)
}

fn text(output: &Output) -> String {
    String::from_utf8(output.borrow().clone()).expect("print writes UTF-8")
}

fn register_double(registry: &mut HostRegistry) {
    registry.register_function("double", |args, line| {
                let n = args.first().ok_or(RuntimeError::ArgumentCountMismatch { name: "double".to_string(),
                                                                                  expected: "1".to_string(),
                                                                                  found: 0,
                                                                                  line })?
                                    .as_number(line)?;
                Ok(Some(Value::from(n * 2.0)))
            })
            .unwrap();
}

#[test]
fn registered_functions_are_called_in_expressions() {
    let (mut registry, output) = captured_registry();
    register_double(&mut registry);

    run("print double(21)\nx = double(1) + 1\nprint x\ny = double 4\nprint y", registry).unwrap();

    assert_eq!(text(&output), "42\n3\n8\n");
}

#[test]
fn statement_calls_take_bare_arguments() {
    let (mut registry, _) = captured_registry();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&calls);
    registry.register_function("log", move |args, _| {
                log.borrow_mut().push(args.iter().map(ToString::to_string).collect::<Vec<_>>());
                Ok(None)
            })
            .unwrap();

    run("log 1, \"a\", [2]\nlog\nif true { log 3 }", registry).unwrap();

    assert_eq!(*calls.borrow(),
               vec![vec!["1".to_string(), "a".to_string(), "[2]".to_string()],
                    Vec::new(),
                    vec!["3".to_string()]]);
}

#[test]
fn statement_call_results_are_discarded() {
    let (mut registry, _) = captured_registry();
    register_double(&mut registry);

    let program = compile("double 2\ndouble(3)", &mut registry).unwrap();
    let mut interpreter = Interpreter::new(registry.into_library(), InterpreterConfig::default());
    interpreter.run(&program).unwrap();

    assert_eq!(interpreter.stack_depth(), 0);
}

#[test]
fn registered_names_change_how_statements_parse() {
    let (registry, output) = captured_registry();
    run("double = 2\nprint double", registry).unwrap();
    assert_eq!(text(&output), "2\n");

    let (mut registry, _) = captured_registry();
    register_double(&mut registry);
    assert!(matches!(compile("double = 2", &mut registry),
                     Err(Error::Syntax(SyntaxError::UnexpectedToken { .. }))));
}

#[test]
fn duplicate_registration_fails() {
    let (mut registry, _) = captured_registry();

    assert_eq!(registry.register_function("print", |_, _| Ok(None)),
               Err(ContextError::DuplicateFunction { name: "print".to_string() }));
    assert_eq!(registry.register_method("count", |_, _, _| Ok(None)),
               Err(ContextError::DuplicateMethod { name: "count".to_string() }));

    registry.register_function("shout", |_, _| Ok(None)).unwrap();
    assert!(registry.register_function("shout", |_, _| Ok(None)).is_err());
}

#[test]
fn registered_methods_receive_the_variable() {
    let (mut registry, output) = captured_registry();
    registry.register_method("sum", |receiver, _, line| {
                let total = receiver.as_list(line)?
                                    .borrow()
                                    .iter()
                                    .map(|value| value.as_number(line))
                                    .sum::<Result<f64, _>>()?;
                Ok(Some(Value::from(total)))
            })
            .unwrap();

    run("xs = [1, 2, 3]\nprint xs.sum()\nxs.add(4)\ntotal = xs.sum()\nprint total", registry).unwrap();

    assert_eq!(text(&output), "6\n10\n");
}

#[test]
fn standard_methods_can_be_registered_under_other_names() {
    let (mut registry, output) = captured_registry();
    registry.register_method("first", list::at).unwrap();

    run("xs = [7, 8]\nprint xs.first(0)", registry).unwrap();
    assert_eq!(text(&output), "7\n");

    let (mut registry, _) = captured_registry();
    registry.register_method("first", list::at).unwrap();
    let result = run("xs = [1]\nprint xs.first()", registry);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 0, line: 2, .. }))));
}

#[test]
fn host_errors_abort_the_run() {
    let (mut registry, output) = captured_registry();
    registry.register_function("fail", |_, line| {
                Err(RuntimeError::HostFailure { name: "fail".to_string(),
                                                details: "refused".to_string(),
                                                line })
            })
            .unwrap();

    let result = run("print 1\nfail\nprint 2", registry);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::HostFailure { line: 2, .. }))));
    assert_eq!(text(&output), "1\n");
}

#[test]
fn with_binds_queued_arguments_in_order() {
    let (mut registry, output) = captured_registry();
    registry.enqueue_argument("21");
    registry.enqueue_argument("x");
    registry.enqueue_argument("TRUE");
    registry.enqueue_argument("[1, two]");

    run("with n: number, name: string\nwith flag: bool, xs: array\nprint name + n * 2\nprint not flag\nprint xs.count()",
        registry).unwrap();

    assert_eq!(text(&output), "x42\nfalse\n2\n");
}

#[test]
fn with_binds_before_anything_runs() {
    let (mut registry, output) = captured_registry();
    registry.enqueue_argument("5");

    let program = compile("print \"start\"\nwith n: number\nprint n", &mut registry).unwrap();
    assert!(registry.arguments().is_empty());
    assert!(output.borrow().is_empty());

    let mut interpreter = Interpreter::new(registry.into_library(), InterpreterConfig::default());
    interpreter.run(&program).unwrap();
    assert_eq!(text(&output), "start\n5\n");
}

#[test]
fn with_errors() {
    let mut registry = HostRegistry::default();
    assert!(matches!(compile("with a: number", &mut registry),
                     Err(Error::Context(ContextError::ArgumentsExhausted { line: 1, .. }))));

    registry.enqueue_argument("abc");
    assert!(matches!(compile("with a: number", &mut registry),
                     Err(Error::Context(ContextError::Coercion { .. }))));

    registry.enqueue_argument("1");
    assert!(matches!(compile("with a number", &mut registry),
                     Err(Error::Syntax(SyntaxError::MalformedDeclaration { .. }))));
    assert!(matches!(compile("with a: thing", &mut registry),
                     Err(Error::Syntax(SyntaxError::MalformedDeclaration { .. }))));
}

#[derive(Debug)]
struct Point {
    x: f64,
}

#[test]
fn opaque_objects_pass_through_unchanged() {
    let (mut registry, output) = captured_registry();
    registry.register_function("point_x", |args, line| {
                let point = match args.first() {
                    Some(Value::Opaque(object)) => object.downcast_ref::<Point>(),
                    _ => None,
                };
                point.map(|point| Some(Value::from(point.x)))
                     .ok_or(RuntimeError::InvalidArgument { details: "expected a point".to_string(),
                                                            line })
            })
            .unwrap();

    registry.enqueue_argument(HostObject::new(Point { x: 3.5 }));

    run("with p: object\nq = p\nprint point_x(p), p\nprint p = q", registry).unwrap();

    assert_eq!(text(&output), "3.5 <object>\ntrue\n");
}
