use calc::{
    EvalError, Number, Token, evaluate,
    error::Expected,
    interpreter::{lexer::Lexer, parser::core::Parser},
};

fn assert_value(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_operator_arithmetic() {
    assert_value("1 + 2", Number::Integer(3));
    assert_value("8 - 5", Number::Integer(3));
    assert_value("7 * 9", Number::Integer(63));
    assert_value("7 / 2", Number::Real(3.5));
    assert_value("0 - 12", Number::Integer(-12));
}

#[test]
fn division_is_always_real() {
    assert_value("6 / 2", Number::Real(3.0));
    assert_value("10 / 4", Number::Real(2.5));
    assert_value("0 / 5", Number::Real(0.0));
    assert_value("1 / 3 * 3", Number::Real(1.0));
}

#[test]
fn integers_without_division_stay_exact() {
    assert_value("42", Number::Integer(42));
    assert_value("9007199254740993 + 0", Number::Integer(9_007_199_254_740_993));
    assert_value("2 * 3 * 4 - 1", Number::Integer(23));
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", Number::Integer(5));
    assert_value("10 - 3 - 2", Number::Integer(5));
    assert_value("16 / 4 / 2", Number::Real(2.0));
    assert_value("8 / 4 / 2", Number::Real(1.0));
    assert_value("100 / 10 * 2", Number::Real(20.0));
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", Number::Integer(14));
    assert_value("2 * 3 + 4", Number::Integer(10));
    assert_value("14 + 2 * 3 - 6 / 2", Number::Real(17.0));
    assert_value("1 + 8 / 4 * 3 - 1", Number::Real(6.0));
}

#[test]
fn whitespace_is_ignored() {
    for src in ["2+3", " 2 + 3 ", "2  +  3", "\t2\t+\n3\r\n"] {
        assert_value(src, Number::Integer(5));
    }
}

#[test]
fn multi_digit_integers() {
    assert_value("123 + 45", Number::Integer(168));
    assert_value("007 * 2", Number::Integer(14));
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("5 / 0"), EvalError::DivisionByZero { index: 2 });
    assert_eq!(assert_failure("1 + 4 / 2 / 0"), EvalError::DivisionByZero { index: 10 });
    assert_eq!(assert_failure("5 / 0 * 0"), EvalError::DivisionByZero { index: 2 });
}

#[test]
fn invalid_character_is_lex_error() {
    assert_eq!(assert_failure("2 & 3"), EvalError::Lex { character: '&', index: 2 });
    assert_eq!(assert_failure("(1 + 2)"), EvalError::Lex { character: '(', index: 0 });
    assert_eq!(assert_failure("1.5 + 2"), EvalError::Lex { character: '.', index: 1 });
    assert_eq!(assert_failure("2 ^ 3"), EvalError::Lex { character: '^', index: 2 });
}

#[test]
fn lex_error_index_counts_characters() {
    assert_eq!(assert_failure("1 + é"), EvalError::Lex { character: 'é', index: 4 });
    assert_eq!(assert_failure("é"), EvalError::Lex { character: 'é', index: 0 });
}

#[test]
fn first_error_is_reported() {
    assert_eq!(assert_failure("1 2 &"),
               EvalError::Syntax { found:    Token::Integer(2),
                                   expected: Expected::OperatorOrEnd,
                                   index:    2, });
    assert!(matches!(assert_failure("5 / 0 &"), EvalError::Lex { character: '&', .. }));
}

#[test]
fn incomplete_expression_is_syntax_error() {
    assert_eq!(assert_failure("2 +"),
               EvalError::Syntax { found:    Token::EndOfInput,
                                   expected: Expected::Integer,
                                   index:    3, });
    assert_eq!(assert_failure("2 *"),
               EvalError::Syntax { found:    Token::EndOfInput,
                                   expected: Expected::Integer,
                                   index:    3, });
}

#[test]
fn trailing_tokens_are_syntax_error() {
    assert_eq!(assert_failure("2 3"),
               EvalError::Syntax { found:    Token::Integer(3),
                                   expected: Expected::OperatorOrEnd,
                                   index:    2, });
}

#[test]
fn operator_in_operand_position_is_syntax_error() {
    assert_eq!(assert_failure("-1"),
               EvalError::Syntax { found:    Token::AddOp('-'),
                                   expected: Expected::Integer,
                                   index:    0, });
    assert_eq!(assert_failure("2 * * 3"),
               EvalError::Syntax { found:    Token::MulOp('*'),
                                   expected: Expected::Integer,
                                   index:    4, });
    assert_eq!(assert_failure("2 + / 3"),
               EvalError::Syntax { found:    Token::MulOp('/'),
                                   expected: Expected::Integer,
                                   index:    4, });
}

#[test]
fn empty_input_is_syntax_error() {
    assert_eq!(assert_failure(""),
               EvalError::Syntax { found:    Token::EndOfInput,
                                   expected: Expected::Integer,
                                   index:    0, });
    assert!(matches!(assert_failure("   "), EvalError::Syntax { index: 3, .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert_eq!(assert_failure("9223372036854775807 + 1"), EvalError::Overflow { index: 20 });
    assert_eq!(assert_failure("0 - 9223372036854775807 - 2"), EvalError::Overflow { index: 24 });
    assert_eq!(assert_failure("4294967296 * 4294967296"), EvalError::Overflow { index: 11 });
}

#[test]
fn oversized_literal_is_overflow() {
    assert_eq!(assert_failure("1 + 99999999999999999999"), EvalError::Overflow { index: 4 });
}

#[test]
fn large_operands_divide_to_nearest_real() {
    assert_value("10000000000000000 / 10", Number::Real(1e15));
    assert_value("9007199254740993 / 1", Number::Real(9_007_199_254_740_992.0));
    assert_value("9007199254740991 / 1", Number::Real(9_007_199_254_740_991.0));
    assert_value("9223372036854775807 / 1", Number::Real(9_223_372_036_854_775_807.0));
    assert_value("9223372036854775807 / 9223372036854775807", Number::Real(1.0));
    assert_value("18014398509481984 / 2", Number::Real(9_007_199_254_740_992.0));
    assert_value("9223372036854775807 * 1 + 0 * 2 / 4", Number::Real(9_223_372_036_854_775_807.0));
}

const BOUNDARY_OPERANDS: [i64; 9] = [0,
                                     1,
                                     2,
                                     9_007_199_254_740_991,
                                     9_007_199_254_740_992,
                                     9_007_199_254_740_993,
                                     10_000_000_000_000_000,
                                     4_611_686_018_427_387_904,
                                     i64::MAX];

#[test]
fn binary_operators_on_boundary_operands() {
    for a in BOUNDARY_OPERANDS {
        for b in BOUNDARY_OPERANDS {
            let index = a.to_string().len() + 1;

            for (symbol, exact) in [('+', i128::from(a) + i128::from(b)),
                                    ('-', i128::from(a) - i128::from(b)),
                                    ('*', i128::from(a) * i128::from(b))]
            {
                let src = format!("{a} {symbol} {b}");
                match i64::try_from(exact) {
                    Ok(n) => assert_value(&src, Number::Integer(n)),
                    Err(_) => assert_eq!(assert_failure(&src), EvalError::Overflow { index }),
                }
            }

            let src = format!("{a} / {b}");
            if b == 0 {
                assert_eq!(assert_failure(&src), EvalError::DivisionByZero { index });
            } else if a % b == 0 && a / b <= 9_007_199_254_740_992 {
                assert_value(&src, Number::Real((a / b) as f64));
            } else {
                assert!(matches!(evaluate(&src), Ok(Number::Real(q)) if q.is_finite()),
                        "{src:?} did not produce a finite real");
            }
        }
    }
}

#[test]
fn evaluations_are_independent() {
    assert!(evaluate("1 +").is_err());
    assert_value("1 + 1", Number::Integer(2));
}

#[test]
fn parser_consumes_lexer_on_demand() {
    let mut parser = Parser::new(Lexer::new("3 * 4 5"));
    assert_eq!(parser.term().unwrap(), Number::Integer(12));
    assert_eq!(parser.peek().unwrap(), Token::Integer(5));
    assert_eq!(parser.index(), 6);
}

#[test]
fn factor_requires_integer() {
    let mut parser = Parser::new(Lexer::new("+ 1"));
    assert!(matches!(parser.factor(),
                     Err(EvalError::Syntax { expected: Expected::Integer, .. })));
}

#[test]
fn number_display() {
    assert_eq!(evaluate("6 / 2").unwrap().to_string(), "3.0");
    assert_eq!(evaluate("7 / 2").unwrap().to_string(), "3.5");
    assert_eq!(evaluate("14 + 2 * 3 - 6 / 2").unwrap().to_string(), "17.0");
    assert_eq!(evaluate("2 + 3").unwrap().to_string(), "5");
    assert!(evaluate("2 + 3").unwrap().is_integer());
    assert!(!evaluate("4 / 2").unwrap().is_integer());
}

#[test]
fn error_display() {
    assert_eq!(assert_failure("2 & 3").to_string(),
               "Error at index 2: Invalid character '&'.");
    assert_eq!(assert_failure("5 / 0").to_string(), "Error at index 2: Division by zero.");
    assert_eq!(assert_failure("2 3").to_string(),
               "Error at index 2: Invalid syntax. Expected operator or end of input, found \
                Token(INTEGER, 3).");
    assert_eq!(assert_failure("2 +").to_string(),
               "Error at index 3: Invalid syntax. Expected integer, found Token(EOF, None).");
}

#[test]
fn eval_error_is_std_error() {
    fn _assert_send_sync_static<T: Send + Sync + 'static + std::error::Error>() {}
    _assert_send_sync_static::<EvalError>();
}

#[test]
fn numbers_convert_from_primitives() {
    assert_eq!(evaluate("3").unwrap(), Number::from(3));
    assert_eq!(evaluate("3 / 4").unwrap(), Number::from(0.75));
}
