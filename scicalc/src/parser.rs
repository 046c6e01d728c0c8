use log::debug;
use crate::collections::{Queue, Stack};
use crate::error::InvalidExpression;
use crate::token::{Func1, InfixExpr, Operator, Token};
use crate::validator::Validator;
use crate::variables::Variables;

pub fn precedence(token: &Token) -> usize {
    // min/max sit at the level of '**' but their arguments arrive already
    // bracketed by the validator, so they behave like any prefix function
    match *token {
        Token::LParen => 0, // keep at bottom
        Token::Op(Operator::Add) | Token::Op(Operator::Sub) => 1,
        Token::Func1(Func1::Neg) => 1,
        Token::Op(Operator::Mul) | Token::Op(Operator::Div) => 2,
        Token::Op(Operator::Pow) => 3,
        Token::Func1(Func1::Sqrt) | Token::Func2(_) => 3,
        Token::Func1(Func1::Cos) | Token::Func1(Func1::Sin) => 4,
        _ => 99,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Queue<Token>);

impl RPNExpr {
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Token> { self.0.iter() }

    /// The tokens in evaluation order, eg: `2 3 4 * +`
    pub fn postfix(&self) -> String {
        self.0.iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    /// Validate and convert an expression that uses no variables.
    pub fn parse_str(expr: &str) -> Result<RPNExpr, InvalidExpression> {
        let vars = Variables::new();
        let (infix, _) = Validator::new(&vars).validate(expr)?;
        Self::parse(infix)
    }

    pub fn parse(expr: InfixExpr) -> Result<RPNExpr, InvalidExpression> {
        if expr.is_empty() {
            return Err(InvalidExpression::EmptyInput);
        }
        let mut out = Queue::new();
        let mut stack = Stack::new();

        for token in expr.0 {
            match token {
                // a stray comma is left for the evaluator to reject
                Token::Number(_) | Token::Comma => out.enqueue(token),
                Token::LParen => stack.push(token),
                Token::RParen => loop {
                    match stack.pop() {
                        Some(Token::LParen) => break,
                        Some(top) => out.enqueue(top),
                        None => return Err(InvalidExpression::UnbalancedBrackets),
                    }
                },
                // Functions have no left operand so they pop nothing, unlike the
                // textbook rule of popping everything of >= precedence first.
                // That rule would pop the '**' in '2**sqrt(4)' before its
                // right operand arrives.
                Token::Func1(_) | Token::Func2(_) => stack.push(token),
                Token::Op(_) => {
                    let prec = precedence(&token);
                    while stack.peek().map_or(false, |top| precedence(top) >= prec) {
                        if let Some(top) = stack.pop() {
                            out.enqueue(top);
                        }
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::LParen => return Err(InvalidExpression::UnbalancedBrackets),
                token => out.enqueue(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("postfix: {}", rpn.postfix());
        Ok(rpn)
    }
}
