#![deny(warnings)]

use crate::scanner::Scanner;

pub const FUNCTIONS: &[&str] = &["sqrt", "sin", "cos", "min", "max"];
pub const CONSTANTS: &[&str] = &["pi"];

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Unknown(String),
    Number(f64),
    Variable(char),
    Constant(String),
    Function(String),
    Op(String),
    OParen, CParen, Comma,
}

/// Splits calculator input into lexemes.
///
/// Minus signs are always emitted as `Op("-")`, numbers are unsigned.
/// Deciding whether a '-' is unary is left to the caller who knows
/// what came before it.
pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<MathToken> {
        self.src.ignore_ws();
        if let Some(op) = self.src.scan_math_op() {
            match op.as_ref() {
                "(" => Some(MathToken::OParen),
                ")" => Some(MathToken::CParen),
                "," => Some(MathToken::Comma),
                _ => Some(MathToken::Op(op)),
            }
        } else if let Some(num) = self.src.scan_number() {
            match num.parse::<f64>() {
                Ok(n) => Some(MathToken::Number(n)),
                Err(_) => Some(MathToken::Unknown(num)),
            }
        } else if let Some(var) = self.src.scan_variable() {
            Some(MathToken::Variable(var))
        } else if let Some(c) = self.src.scan_keyword(CONSTANTS) {
            Some(MathToken::Constant(c))
        } else if let Some(f) = self.src.scan_keyword(FUNCTIONS) {
            Some(MathToken::Function(f))
        } else if self.src.next().is_some() {
            Some(MathToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = MathToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
