use thiserror::Error;

/// Every way an expression can be rejected, from validation to evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidExpression {
    #[error("the expression is empty")]
    EmptyExpression,
    #[error("an expression can't start or end with '{0}'")]
    InvalidBoundaryCharacter(char),
    #[error("invalid character(s) '{0}' in the expression")]
    InvalidCharacter(String),
    #[error("brackets are not paired correctly")]
    UnbalancedBrackets,
    #[error("too many commas, min and max take exactly two arguments")]
    TooManyCommas,
    #[error("missing commas, min and max take exactly two arguments")]
    TooFewCommas,
    #[error("two operators in a row")]
    ConsecutiveOperators,
    #[error("negate numbers, variables or bracketed expressions only, e.g. '(-3)' or '-(sin(3))'")]
    MissingUnaryBrackets,
    #[error("variable {0} is not defined")]
    UndefinedVariable(char),
    #[error("variable {0} refers back to itself")]
    CircularReference(char),
    #[error("'{0}' is not a valid variable name, use a capital letter A-Z")]
    InvalidVariableName(String),
    #[error("no tokens to evaluate")]
    EmptyInput,
    #[error("unrecognised token: {0}")]
    UnrecognisedToken(String),
    #[error("not enough operands")]
    InsufficientOperands,
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("maximum numeric range exceeded, try a smaller calculation")]
    NumericOverflow,
    #[error("the result is not a real number")]
    UndefinedResult,
    #[error("the expression does not reduce to a single value")]
    MalformedExpression,
}
