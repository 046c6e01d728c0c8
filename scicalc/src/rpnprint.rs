use crate::parser::{precedence, RPNExpr};
use crate::token::{Func1, Token};
use std::fmt;

fn arity(token: &Token) -> usize {
    match *token {
        Token::Func1(_) => 1,
        Token::Func2(_) | Token::Op(_) => 2,
        _ => 0,
    }
}

// a printed subexpression and the precedence of its outermost operator
type Printed = (String, usize);

fn leaf(token: &Token) -> Option<Printed> {
    match *token {
        Token::Number(x) if x < 0.0 => Some((format!("({})", x), 99)),
        Token::Number(_) => Some((token.to_string(), 99)),
        _ => None,
    }
}

fn node(token: &Token, mut args: Vec<Printed>) -> Printed {
    match *token {
        Token::Func1(Func1::Neg) => (format!("(-({}))", args[0].0), 99),
        Token::Func1(func) => (format!("{}({})", func, args[0].0), 99),
        Token::Func2(func) => (format!("{}({}, {})", func, args[0].0, args[1].0), 99),
        _ => {
            let (rhs, lhs) = (args.swap_remove(1), args.swap_remove(0));
            let prec = precedence(token);
            // everything is left associative
            let mut out = if prec > lhs.1 {
                format!("({})", lhs.0)
            } else {
                lhs.0
            };
            out.push_str(&format!(" {} ", token));
            if prec >= rhs.1 {
                out.push_str(&format!("({})", rhs.0));
            } else {
                out.push_str(&rhs.0);
            }
            (out, prec)
        }
    }
}

impl RPNExpr {
    // Replays the postfix on a stack of printed subexpressions. None if the
    // expression doesn't reduce to a single one.
    fn to_infix(&self) -> Option<String> {
        let mut printed: Vec<Printed> = Vec::new();
        for token in self.iter() {
            let n = arity(token);
            if n == 0 {
                printed.push(leaf(token)?);
                continue;
            }
            if printed.len() < n {
                return None;
            }
            let args = printed.split_off(printed.len() - n);
            printed.push(node(token, args));
        }
        match printed.len() {
            1 => printed.pop().map(|(infix, _)| infix),
            _ => None,
        }
    }
}

// Infix form with only the brackets precedence requires. Negative numbers
// and negations keep theirs so the output can be fed back to the validator.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_infix() {
            Some(infix) => write!(f, "{}", infix),
            None => write!(f, "{}", self.postfix()),
        }
    }
}
