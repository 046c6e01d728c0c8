use std::f64::consts;
use std::iter::Peekable;
use log::{debug, trace};
use lexers::{MathToken, MathTokenizer};
use crate::error::InvalidExpression;
use crate::token::{Func1, Func2, InfixExpr, Operator, Token};
use crate::variables::Variables;

// besides digits and defined variables
const START_CHARS: &[char] = &['(', '.', 'c', 's', 'm', 'p'];
const END_CHARS: &[char] = &[')', '.', 'i'];

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        _ => None,
    }
}

// 'X=<rest>' assigns the result of <rest> to X
fn split_assignment(expr: &str) -> (Option<char>, &str) {
    let mut chars = expr.chars();
    match (chars.next(), chars.next()) {
        (Some(name), Some('=')) if Variables::is_valid_name(name) => (Some(name), &expr[2..]),
        _ => (None, expr),
    }
}

/// Checks user input and turns it into a flat sequence of tokens.
///
/// Besides catching malformed input this rewrites the expression so the
/// converter only deals with numbers, operators, functions and brackets:
/// variables and constants are replaced by their values, unary minus is
/// folded into numbers or becomes the `n` function, and each argument of
/// `min`/`max` gets its own bracket pair in place of the comma.
pub struct Validator<'a> {
    vars: &'a Variables,
}

impl<'a> Validator<'a> {
    pub fn new(vars: &'a Variables) -> Validator<'a> {
        Validator{vars}
    }

    /// Validate `expression`, returning its tokens and the variable it
    /// assigns to, if any.
    pub fn validate(&self, expression: &str) -> Result<(InfixExpr, Option<char>), InvalidExpression> {
        let stripped = expression.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        let (target, body) = split_assignment(&stripped);
        let tokens = self.validate_body(body, &mut Vec::new())?;
        debug!("validated '{}' into {:?}", expression, tokens);
        Ok((InfixExpr(tokens), target))
    }

    // 'expanding' holds the variables currently being substituted, meeting
    // one of them again means the definitions form a cycle
    fn validate_body(&self, body: &str, expanding: &mut Vec<char>) -> Result<Vec<Token>, InvalidExpression> {
        let body = body.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        if body.is_empty() {
            return Err(InvalidExpression::EmptyExpression);
        }
        self.check_boundaries(&body)?;

        let lexemes = MathTokenizer::new(body.chars()).collect::<Vec<_>>();
        if let Some(MathToken::Unknown(bad)) = lexemes.iter()
            .find(|lexeme| matches!(lexeme, MathToken::Unknown(_))) {
            return Err(InvalidExpression::InvalidCharacter(bad.clone()));
        }

        let mut lexemes = lexemes.into_iter().peekable();
        let mut rw = Rewriter::default();
        while let Some(lexeme) = lexemes.next() {
            match lexeme {
                MathToken::Number(n) => rw.emit(Token::Number(n)),
                MathToken::Constant(name) => match constant(&name) {
                    Some(value) => rw.emit(Token::Number(value)),
                    None => return Err(InvalidExpression::InvalidCharacter(name)),
                },
                MathToken::Variable(name) => {
                    let value = self.expand(name, expanding)?;
                    rw.emit_grouped(value);
                }
                MathToken::Function(name) => match Token::function(&name) {
                    Some(Token::Func2(func)) => rw.open_pair(func),
                    Some(func) => rw.emit(func),
                    None => return Err(InvalidExpression::InvalidCharacter(name)),
                },
                MathToken::OParen => rw.open(),
                MathToken::CParen => rw.close()?,
                MathToken::Comma => rw.comma()?,
                MathToken::Op(ref op) if op == "-" && rw.expects_operand() => {
                    self.unary_minus(&mut lexemes, &mut rw, expanding)?;
                }
                MathToken::Op(op) => {
                    let op = Operator::from_symbol(&op)
                        .ok_or(InvalidExpression::InvalidCharacter(op))?;
                    if let Some(Token::Op(_)) = rw.prev() {
                        return Err(InvalidExpression::ConsecutiveOperators);
                    }
                    rw.emit(Token::Op(op));
                }
                MathToken::Unknown(bad) => return Err(InvalidExpression::InvalidCharacter(bad)),
            }
        }
        rw.finish()
    }

    fn check_boundaries(&self, body: &str) -> Result<(), InvalidExpression> {
        let allowed = |c: char, extra: &[char]| {
            c.is_ascii_digit() || extra.contains(&c) || self.vars.contains(c)
        };
        if let Some(first) = body.chars().next() {
            if !allowed(first, START_CHARS) {
                return Err(InvalidExpression::InvalidBoundaryCharacter(first));
            }
        }
        if let Some(last) = body.chars().last() {
            if !allowed(last, END_CHARS) {
                return Err(InvalidExpression::InvalidBoundaryCharacter(last));
            }
        }
        Ok(())
    }

    // tokens of a variable's own expression
    fn expand(&self, name: char, expanding: &mut Vec<char>) -> Result<Vec<Token>, InvalidExpression> {
        let value = self.vars.get(name)
            .ok_or(InvalidExpression::UndefinedVariable(name))?;
        if expanding.contains(&name) {
            return Err(InvalidExpression::CircularReference(name));
        }
        trace!("expanding {} = {}", name, value);
        expanding.push(name);
        let tokens = self.validate_body(value, expanding);
        expanding.pop();
        tokens
    }

    fn unary_minus<I>(&self, lexemes: &mut Peekable<I>, rw: &mut Rewriter, expanding: &mut Vec<char>)
        -> Result<(), InvalidExpression>
        where I: Iterator<Item=MathToken>
    {
        match lexemes.peek() {
            Some(&MathToken::Number(n)) => {
                lexemes.next();
                rw.emit(Token::Number(-n));
            }
            Some(MathToken::Constant(name)) => {
                let value = constant(name)
                    .ok_or(InvalidExpression::InvalidCharacter(name.clone()))?;
                lexemes.next();
                rw.emit(Token::Number(-value));
            }
            Some(&MathToken::Variable(name)) => {
                lexemes.next();
                let value = self.expand(name, expanding)?;
                if let [Token::Number(n)] = value[..] {
                    rw.emit(Token::Number(-n));
                } else {
                    rw.emit(Token::Func1(Func1::Neg));
                    rw.emit_grouped(value);
                }
            }
            // the bracket itself is handled on the next turn
            Some(MathToken::OParen) => rw.emit(Token::Func1(Func1::Neg)),
            _ => return Err(InvalidExpression::MissingUnaryBrackets),
        }
        Ok(())
    }
}

// Output of the rewriting pass plus the bracket bookkeeping it needs.
#[derive(Default)]
struct Rewriter {
    out: Vec<Token>,
    depth: usize,
    // depths that get an extra ')' once a closing bracket returns to them
    pending: Vec<usize>,
    commas: usize,
}

impl Rewriter {
    fn emit(&mut self, token: Token) {
        trace!("emit {}", token);
        self.out.push(token);
    }

    fn prev(&self) -> Option<&Token> {
        self.out.last()
    }

    // a '-' here can't be subtraction
    fn expects_operand(&self) -> bool {
        matches!(self.prev(), None | Some(Token::LParen) | Some(Token::Op(_)))
    }

    // already validated tokens, wrapped so they bind as one operand
    fn emit_grouped(&mut self, tokens: Vec<Token>) {
        self.out.push(Token::LParen);
        self.out.extend(tokens);
        self.out.push(Token::RParen);
    }

    fn open(&mut self) {
        self.depth += 1;
        self.emit(Token::LParen);
    }

    fn close(&mut self) -> Result<(), InvalidExpression> {
        if self.depth == 0 {
            return Err(InvalidExpression::UnbalancedBrackets);
        }
        self.depth -= 1;
        self.emit(Token::RParen);
        if self.pending.last() == Some(&self.depth) {
            self.pending.pop();
            self.depth -= 1;
            self.emit(Token::RParen);
        }
        Ok(())
    }

    // min/max and the bracket enclosing both arguments
    fn open_pair(&mut self, func: Func2) {
        self.emit(Token::Func2(func));
        self.open();
        self.pending.push(self.depth);
        self.commas += 1;
    }

    // close one argument and open the next
    fn comma(&mut self) -> Result<(), InvalidExpression> {
        if self.commas == 0 {
            return Err(InvalidExpression::TooManyCommas);
        }
        if self.depth == 0 {
            return Err(InvalidExpression::UnbalancedBrackets);
        }
        self.commas -= 1;
        self.emit(Token::RParen);
        self.emit(Token::LParen);
        Ok(())
    }

    fn finish(self) -> Result<Vec<Token>, InvalidExpression> {
        if self.depth != 0 || !self.pending.is_empty() {
            return Err(InvalidExpression::UnbalancedBrackets);
        }
        if self.commas > 0 {
            return Err(InvalidExpression::TooFewCommas);
        }
        Ok(self.out)
    }
}
