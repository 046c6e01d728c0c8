use crate::error::InvalidExpression;
use crate::parser::{RPNExpr, ShuntingParser};
use crate::token::{Func1, Func2, InfixExpr, Operator, Token};

fn num(n: f64) -> Token { Token::Number(n) }
fn op(symbol: &str) -> Token { Token::Op(Operator::from_symbol(symbol).unwrap()) }

fn check(rpn: &RPNExpr, expect: &[Token]) {
    assert_eq!(rpn.len(), expect.len(), "got: {}", rpn.postfix());
    for (token, expected) in rpn.iter().zip(expect.iter()) {
        assert_eq!(token, expected);
    }
}

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("2+3*4").unwrap();
    check(&rpn, &[num(2.0), num(3.0), num(4.0), op("*"), op("+")]);

    let rpn = ShuntingParser::parse_str("10-3-2").unwrap();
    check(&rpn, &[num(10.0), num(3.0), op("-"), num(2.0), op("-")]);

    // '**' is left associative too
    let rpn = ShuntingParser::parse_str("2**3**2").unwrap();
    check(&rpn, &[num(2.0), num(3.0), op("**"), num(2.0), op("**")]);
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("2+(-2)*(-(sqrt(9)))+min(5,1)").unwrap();
    let expect = [
        num(2.0),
        num(-2.0),
        num(9.0),
        Token::Func1(Func1::Sqrt),
        Token::Func1(Func1::Neg),
        op("*"),
        op("+"),
        num(5.0),
        num(1.0),
        Token::Func2(Func2::Min),
        op("+"),
    ];
    check(&rpn, &expect);
}

#[test]
fn test_parse3() {
    let rpn = ShuntingParser::parse_str("5*25/900*sqrt(9)+min(sin(60),1)").unwrap();
    let expect = [
        num(5.0),
        num(25.0),
        op("*"),
        num(900.0),
        op("/"),
        num(9.0),
        Token::Func1(Func1::Sqrt),
        op("*"),
        num(60.0),
        Token::Func1(Func1::Sin),
        num(1.0),
        Token::Func2(Func2::Min),
        op("+"),
    ];
    check(&rpn, &expect);
}

#[test]
fn prefix_functions() {
    let rpn = ShuntingParser::parse_str("2*-(3)").unwrap();
    check(&rpn, &[num(2.0), num(3.0), Token::Func1(Func1::Neg), op("*")]);

    let rpn = ShuntingParser::parse_str("2**sqrt(4)").unwrap();
    check(&rpn, &[num(2.0), num(4.0), Token::Func1(Func1::Sqrt), op("**")]);

    let rpn = ShuntingParser::parse_str("sin(30)**2").unwrap();
    check(&rpn, &[num(30.0), Token::Func1(Func1::Sin), num(2.0), op("**")]);
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse(InfixExpr(vec![]));
    assert_eq!(rpn, Err(InvalidExpression::EmptyInput));

    let rpn = ShuntingParser::parse(InfixExpr(vec![num(1.0), Token::RParen]));
    assert_eq!(rpn, Err(InvalidExpression::UnbalancedBrackets));

    let rpn = ShuntingParser::parse(InfixExpr(vec![Token::LParen, num(1.0)]));
    assert_eq!(rpn, Err(InvalidExpression::UnbalancedBrackets));

    let rpn = ShuntingParser::parse_str("(1+2");
    assert_eq!(rpn, Err(InvalidExpression::UnbalancedBrackets));
}

#[test]
fn commas_pass_through() {
    let rpn = ShuntingParser::parse(InfixExpr(vec![num(1.0), Token::Comma, num(2.0)])).unwrap();
    check(&rpn, &[num(1.0), Token::Comma, num(2.0)]);
}

#[test]
fn postfix_string() {
    let rpn = ShuntingParser::parse_str("5*25/900").unwrap();
    assert_eq!(rpn.postfix(), "5 25 * 900 /");
    let rpn = ShuntingParser::parse_str("(-3)*(-(2))").unwrap();
    assert_eq!(rpn.postfix(), "-3 2 n *");
}

#[test]
fn infix_display() {
    let tests = vec![
        ("2+3*4", "2 + 3 * 4"),
        ("(2+3)*4", "(2 + 3) * 4"),
        ("10-(3-2)", "10 - (3 - 2)"),
        ("(-3)**2", "(-3) ** 2"),
        ("sqrt(9)+sin(30)", "sqrt(9) + sin(30)"),
        ("min(1,2)*-(3)", "min(1, 2) * (-(3))"),
        ("max(1+2,cos(0))", "max(1 + 2, cos(0))"),
        ("(-(3))+2", "(-(3)) + 2"),
        ("(-(2+1))", "(-(2 + 1))"),
        ("2-(-(sqrt(4)))", "2 - (-(sqrt(4)))"),
    ];
    for (input, expect) in tests.iter() {
        let rpn = ShuntingParser::parse_str(input).unwrap();
        assert_eq!(rpn.to_string(), *expect);
    }

    // no single tree, falls back to postfix
    let rpn = RPNExpr(vec![num(1.0), num(2.0)].into_iter().collect());
    assert_eq!(rpn.to_string(), "1 2");
}
