use std::fmt;
use std::ops::Deref;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator { Add, Sub, Mul, Div, Pow }

/// One argument functions, `Neg` is unary minus.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Func1 { Neg, Cos, Sin, Sqrt }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Func2 { Min, Max }

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token {
    Number(f64),
    Op(Operator),
    Func1(Func1),
    Func2(Func2),
    LParen, RParen, Comma,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "**" => Some(Operator::Pow),
            _ => None,
        }
    }
}

impl Token {
    // map a function name to its token, None if the name is unknown
    pub fn function(name: &str) -> Option<Token> {
        match name {
            "cos" => Some(Token::Func1(Func1::Cos)),
            "sin" => Some(Token::Func1(Func1::Sin)),
            "sqrt" => Some(Token::Func1(Func1::Sqrt)),
            "min" => Some(Token::Func2(Func2::Min)),
            "max" => Some(Token::Func2(Func2::Max)),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "**",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for Func1 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Func1::Neg => "n",
            Func1::Cos => "cos",
            Func1::Sin => "sin",
            Func1::Sqrt => "sqrt",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Func2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Func2::Min => write!(f, "min"),
            Func2::Max => write!(f, "max"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Op(op) => write!(f, "{}", op),
            Token::Func1(func) => write!(f, "{}", func),
            Token::Func2(func) => write!(f, "{}", func),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// A validated infix token sequence.
#[derive(Clone, PartialEq, Debug)]
pub struct InfixExpr(pub Vec<Token>);

impl Deref for InfixExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] { &self.0 }
}

// Writes the tokens back as input the validator accepts. The bracket pairs
// injected around min/max arguments are folded back into 'name(a,b)'.
impl fmt::Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut depth = 0usize;
        // depths at which a min/max argument pair sits
        let mut frames = Vec::new();
        let mut tokens = self.0.iter().peekable();
        while let Some(token) = tokens.next() {
            match token {
                Token::Func2(func) => {
                    write!(f, "{}", func)?;
                    if let Some(Token::LParen) = tokens.peek() {
                        tokens.next();
                        depth += 1;
                        frames.push(depth);
                    }
                }
                Token::Func1(Func1::Neg) => write!(f, "-")?,
                Token::LParen => {
                    depth += 1;
                    write!(f, "(")?;
                }
                Token::RParen => {
                    depth = depth.saturating_sub(1);
                    if frames.last() == Some(&depth) {
                        match tokens.peek() {
                            Some(Token::LParen) => {
                                tokens.next();
                                depth += 1;
                                write!(f, ",")?;
                                continue;
                            }
                            Some(Token::RParen) => {
                                tokens.next();
                                depth -= 1;
                                frames.pop();
                            }
                            _ => (),
                        }
                    }
                    write!(f, ")")?;
                }
                other => write!(f, "{}", other)?,
            }
        }
        Ok(())
    }
}
