//! A scientific calculator.
//!
//! Expressions go through three stages: the [`Validator`] checks the text
//! and turns it into tokens, the [`ShuntingParser`] reorders them into
//! postfix, and [`rpneval::eval`] runs the result on a stack machine.
//!
//! ```
//! use scicalc::{calculate, MathValue, Variables};
//!
//! let mut vars = Variables::new();
//! vars.set('A', "1.5").unwrap();
//! let (value, target) = calculate("B = 2 * max(A, 1)", &vars).unwrap();
//! assert_eq!(value, MathValue::Integer(3));
//! assert_eq!(target, Some('B'));
//! ```

pub mod collections;
pub mod parser;
pub mod rpneval;
pub mod validator;

mod error;
mod rpnprint;
mod token;
mod variables;

pub use error::InvalidExpression;
pub use parser::{RPNExpr, ShuntingParser};
pub use rpneval::MathValue;
pub use token::{Func1, Func2, InfixExpr, Operator, Token};
pub use validator::Validator;
pub use variables::Variables;

/// Check an expression and expand it into tokens. Also returns the
/// variable an `X=...` expression assigns to.
pub fn validate(expression: &str, vars: &Variables) -> Result<(InfixExpr, Option<char>), InvalidExpression> {
    Validator::new(vars).validate(expression)
}

pub fn convert(tokens: InfixExpr) -> Result<RPNExpr, InvalidExpression> {
    ShuntingParser::parse(tokens)
}

pub fn evaluate(rpn: RPNExpr) -> Result<MathValue, InvalidExpression> {
    rpneval::eval(rpn)
}

/// All three stages in a row. Storing the value under the returned
/// variable name is up to the caller.
pub fn calculate(expression: &str, vars: &Variables) -> Result<(MathValue, Option<char>), InvalidExpression> {
    let (tokens, target) = validate(expression, vars)?;
    let value = evaluate(convert(tokens)?)?;
    Ok((value, target))
}

#[cfg(test)]
mod parser_test;
