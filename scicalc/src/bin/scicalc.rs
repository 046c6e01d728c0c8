use std::env;
use std::path::PathBuf;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const HELP: &str = "\
Numbers:     12  3.5  .5  7.
Operators:   +  -  *  /  ** (power, left associative)
Functions:   sqrt(x)  sin(x)  cos(x)  min(a, b)  max(a, b)
             sin and cos take degrees
Constants:   pi
Negation:    -3  -A  -pi  -(expression)
Variables:   a single capital letter, X = expression stores the result
Commands:    vars  help  q | quit

Expressions can't start or end with an operator, eg: 2*(-3) not -3*2

Examples:
    >> 5*25/900*sqrt(9) + min(sin(60), 1)
    >> A = 1.45
    >> (-3)*A**2.5";

fn history_path() -> Option<PathBuf> {
    match env::var_os("SCICALC_HISTORY") {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::home_dir().map(|home| home.join(".scicalc_history")),
    }
}

mod repl {
    use rustyline::DefaultEditor;
    use scicalc::{convert, evaluate, validate, InvalidExpression, MathValue, Variables};

    /// What each stage made of one input line.
    pub struct Steps {
        pub tokens: String,
        pub postfix: String,
        pub infix: String,
        pub value: MathValue,
        pub target: Option<char>,
    }

    impl Steps {
        pub fn run(input: &str, vars: &Variables) -> Result<Steps, InvalidExpression> {
            let (tokens, target) = validate(input, vars)?;
            let rendered = tokens.to_string();
            let rpn = convert(tokens)?;
            let (postfix, infix) = (rpn.postfix(), rpn.to_string());
            let value = evaluate(rpn)?;
            Ok(Steps{tokens: rendered, postfix, infix, value, target})
        }

        pub fn lines(&self) -> Vec<String> {
            vec![
                format!("Validated tokens: {}", self.tokens),
                format!("Reverse Polish Notation (RPN): {}", self.postfix),
            ]
        }
    }

    // one-shot mode has no variables to store into
    pub fn evalexpr(input: &str) -> Result<Vec<String>, InvalidExpression> {
        let steps = Steps::run(input, &Variables::new())?;
        let mut lines = steps.lines();
        if let Some(name) = steps.target {
            lines.push(format!("{} is not stored, variables only live in the interactive mode", name));
        }
        lines.push(format!("{} = {}", steps.infix, steps.value));
        Ok(lines)
    }

    // stored values must pass validation when used later
    pub fn as_expression(value: MathValue) -> String {
        if value.as_f64() < 0.0 {
            format!("({})", value)
        } else {
            value.to_string()
        }
    }

    fn confirm(rl: &mut DefaultEditor, name: char, old: &str) -> bool {
        println!("{} is already set to {}", name, old);
        match rl.readline("overwrite? [y/N] ") {
            Ok(answer) => answer.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }

    pub fn list_vars(vars: &Variables) {
        if vars.is_empty() {
            println!("No variables defined");
        }
        for (name, value) in vars.iter() {
            println!("{} = {}", name, value);
        }
    }

    pub fn statement(rl: &mut DefaultEditor, vars: &mut Variables, input: &str) {
        let steps = match Steps::run(input, vars) {
            Err(e) => return println!("Error: {}", e),
            Ok(steps) => steps,
        };
        for line in steps.lines() {
            println!("{}", line);
        }
        let name = match steps.target {
            None => return println!("{}", steps.value),
            Some(name) => name,
        };
        if let Some(old) = vars.get(name).map(|old| old.to_string()) {
            if !confirm(rl, name, &old) {
                return println!("{} unchanged", name);
            }
        }
        match vars.set(name, as_expression(steps.value)) {
            Err(e) => println!("Error: {}", e),
            Ok(_) => println!("{} = {}", name, steps.value),
        }
    }
}

fn main() -> Result<(), String> {
    pretty_env_logger::init();

    if env::args().len() > 1 {
        let input = env::args().skip(1).collect::<Vec<String>>().join(" ");
        match repl::evalexpr(&input) {
            Err(e) => println!("Error: {}", e),
            Ok(lines) => lines.iter().for_each(|line| println!("{}", line)),
        }
        return Ok(());
    }

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = history_path();
    if let Some(path) = &histpath {
        if let Err(e) = rl.load_history(path) {
            info!("no history loaded from {}: {}", path.display(), e);
        }
    }

    let mut vars = scicalc::Variables::new();
    loop {
        let line = match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => line,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Err(e) = rl.add_history_entry(input) {
            warn!("couldn't add '{}' to history: {}", input, e);
        }
        match input {
            "q" | "quit" => break,
            "help" => println!("{}", HELP),
            "vars" => repl::list_vars(&vars),
            _ => repl::statement(&mut rl, &mut vars, input),
        }
    }

    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            warn!("couldn't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}
