use std::fmt;
use log::{debug, trace};
use crate::collections::Stack;
use crate::error::InvalidExpression;
use crate::parser::RPNExpr;
use crate::token::{Func1, Func2, Operator, Token};

// results are rounded to this many fractional digits
const DECIMALS: i32 = 10;

/// Result of an evaluation, integral values come back as `Integer`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MathValue {
    Integer(i64),
    Float(f64),
}

impl MathValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MathValue::Integer(i) => i as f64,
            MathValue::Float(x) => x,
        }
    }
}

// drop float noise like 0.5000000000000001
fn round(x: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    let scaled = x * scale;
    if x.fract() == 0.0 || !scaled.is_finite() {
        return x;
    }
    scaled.round() / scale
}

impl From<f64> for MathValue {
    fn from(x: f64) -> MathValue {
        let x = round(x);
        if x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
            MathValue::Integer(x as i64)
        } else {
            MathValue::Float(x)
        }
    }
}

impl fmt::Display for MathValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MathValue::Integer(i) => write!(f, "{}", i),
            MathValue::Float(x) => write!(f, "{}", x),
        }
    }
}

// every value entering the stack must be a real, finite number
fn checked(x: f64) -> Result<f64, InvalidExpression> {
    if x.is_nan() {
        Err(InvalidExpression::UndefinedResult)
    } else if x.is_infinite() {
        Err(InvalidExpression::NumericOverflow)
    } else {
        Ok(x)
    }
}

fn eval_fn1(func: Func1, x: f64) -> Result<f64, InvalidExpression> {
    match func {
        Func1::Neg => Ok(-x),
        // angles are given in degrees
        Func1::Cos => Ok(x.to_radians().cos()),
        Func1::Sin => Ok(x.to_radians().sin()),
        Func1::Sqrt if x < 0.0 => Err(InvalidExpression::NegativeSquareRoot),
        Func1::Sqrt => Ok(x.sqrt()),
    }
}

fn eval_fn2(func: Func2, l: f64, r: f64) -> f64 {
    match func {
        Func2::Min => l.min(r),
        Func2::Max => l.max(r),
    }
}

fn eval_op(op: Operator, l: f64, r: f64) -> Result<f64, InvalidExpression> {
    match op {
        Operator::Add => Ok(l + r),
        Operator::Sub => Ok(l - r),
        Operator::Mul => Ok(l * r),
        Operator::Div if r == 0.0 => Err(InvalidExpression::DivisionByZero),
        Operator::Div => Ok(l / r),
        Operator::Pow if l == 0.0 && r < 0.0 => Err(InvalidExpression::DivisionByZero),
        Operator::Pow => Ok(l.powf(r)),
    }
}

/// Run the postfix expression on a stack machine.
pub fn eval(rpn: RPNExpr) -> Result<MathValue, InvalidExpression> {
    let mut tokens = rpn.0;
    if tokens.is_empty() {
        return Err(InvalidExpression::EmptyInput);
    }
    let mut operands = Stack::new();

    while let Some(token) = tokens.dequeue() {
        let value = match token {
            Token::Number(num) => num,
            Token::Func1(func) => {
                let x = operands.pop().ok_or(InvalidExpression::InsufficientOperands)?;
                eval_fn1(func, x)?
            }
            Token::Func2(func) => {
                let r = operands.pop().ok_or(InvalidExpression::InsufficientOperands)?;
                let l = operands.pop().ok_or(InvalidExpression::InsufficientOperands)?;
                eval_fn2(func, l, r)
            }
            Token::Op(op) => {
                let r = operands.pop().ok_or(InvalidExpression::InsufficientOperands)?;
                let l = operands.pop().ok_or(InvalidExpression::InsufficientOperands)?;
                eval_op(op, l, r)?
            }
            Token::LParen | Token::RParen | Token::Comma => {
                return Err(InvalidExpression::UnrecognisedToken(token.to_string()));
            }
        };
        trace!("{} -> {}", token, value);
        operands.push(checked(value)?);
    }

    if operands.len() != 1 {
        return Err(InvalidExpression::MalformedExpression);
    }
    let result = operands.pop().map(MathValue::from)
        .ok_or(InvalidExpression::MalformedExpression)?;
    debug!("evaluated to {}", result);
    Ok(result)
}
