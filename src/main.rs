use std::fs;

use clap::Parser;
use sgl::{
    compile,
    config::InterpreterConfig,
    init_tracing,
    interpreter::{evaluator::core::Interpreter, host::registry::HostRegistry},
    printer::render,
};

/// sgl runs scripts written in a small embeddable scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sgl to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed program as a tree before running it.
    #[arg(short, long)]
    tree: bool,

    /// Maximum number of nested scopes before the run fails.
    #[arg(long, value_name = "N")]
    max_scope_depth: Option<usize>,

    /// Closes a block's scope when `break` or `return` leaves it early.
    #[arg(long)]
    close_scopes: bool,

    /// The script, or the path to it with `--file`.
    contents: String,

    /// Values bound, in order, by the script's `with` declarations.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl From<&Args> for InterpreterConfig {
    fn from(args: &Args) -> Self {
        let config = Self::default().with_close_scopes_on_early_exit(args.close_scopes);
        match args.max_scope_depth {
            Some(depth) => config.with_max_scope_depth(depth),
            None => config,
        }
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let mut registry = HostRegistry::new();
    for value in &args.args {
        registry.enqueue_argument(value.as_str());
    }

    if let Err(e) = execute(&script, registry, InterpreterConfig::from(&args), args.tree) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Compiles and runs `script`, printing the tree first when asked to.
fn execute(script: &str, mut registry: HostRegistry, config: InterpreterConfig, tree: bool) -> Result<(), sgl::Error> {
    let program = compile(script, &mut registry)?;
    if tree {
        print!("{}", render(&program));
    }

    let mut interpreter = Interpreter::new(registry.into_library(), config);
    interpreter.run(&program)?;
    Ok(())
}
