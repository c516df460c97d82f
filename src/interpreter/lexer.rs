use logos::Logos;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a lexical token in the source input.
///
/// Tokens are produced one at a time by the [`Lexer`] and consumed by the
/// parser. Whitespace never appears here; it is skipped inside the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Non-negative integer literal, such as `42`.
    Integer(i64),
    /// `*` or `/`
    MulOp(char),
    /// `+` or `-`
    AddOp(char),
    /// No input left. Returned repeatedly once the input is exhausted.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "Token(INTEGER, {n})"),
            Self::MulOp(op) => write!(f, "Token(MULOP, {op:?})"),
            Self::AddOp(op) => write!(f, "Token(ADDOP, {op:?})"),
            Self::EndOfInput => write!(f, "Token(EOF, None)"),
        }
    }
}

/// Failure reported by the generated scanner.
#[derive(Debug, Clone, PartialEq, Default)]
enum LexingError {
    /// No rule matches the current character.
    #[default]
    InvalidCharacter,
    /// A digit run does not fit in an `i64`.
    IntegerTooLarge,
}

/// Raw tokens recognized by the `logos` scanner.
#[derive(Logos, Debug, PartialEq)]
#[logos(error = LexingError)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[token("*", |_| '*')]
    #[token("/", |_| '/')]
    MulOp(char),
    #[token("+", |_| '+')]
    #[token("-", |_| '-')]
    AddOp(char),
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexingError::IntegerTooLarge)`: If the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Result<i64, LexingError> {
    lex.slice().parse().map_err(|_| LexingError::IntegerTooLarge)
}

/// Pull-based lexer over a single input string.
///
/// Wraps a [`logos::Lexer`] and hands out one [`Token`] per call to
/// [`Lexer::next_token`]. The lexer remembers where the most recently
/// produced token starts so that the parser can report positions.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("12 * 3");
/// assert_eq!(lexer.next_token().unwrap(), Token::Integer(12));
/// assert_eq!(lexer.next_token().unwrap(), Token::MulOp('*'));
/// assert_eq!(lexer.next_token().unwrap(), Token::Integer(3));
/// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
/// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
/// ```
pub struct Lexer<'source> {
    inner:       logos::Lexer<'source, RawToken>,
    source:      &'source str,
    /// Byte offset where the last produced token starts.
    token_start: usize,
    finished:    bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: RawToken::lexer(source),
               source,
               token_start: 0,
               finished: false }
    }

    /// Returns the next token, skipping any whitespace before it.
    ///
    /// Once the input is exhausted every further call returns
    /// [`Token::EndOfInput`] without failing.
    ///
    /// # Errors
    /// - [`EvalError::Lex`] if a character does not start any token.
    /// - [`EvalError::Overflow`] if an integer literal does not fit in `i64`.
    pub fn next_token(&mut self) -> EvalResult<Token> {
        if self.finished {
            return Ok(Token::EndOfInput);
        }

        let Some(raw) = self.inner.next() else {
            self.finished = true;
            self.token_start = self.source.len();
            return Ok(Token::EndOfInput);
        };
        self.token_start = self.inner.span().start;

        match raw {
            Ok(RawToken::Integer(n)) => Ok(Token::Integer(n)),
            Ok(RawToken::MulOp(op)) => Ok(Token::MulOp(op)),
            Ok(RawToken::AddOp(op)) => Ok(Token::AddOp(op)),
            Err(LexingError::IntegerTooLarge) => Err(EvalError::Overflow { index: self.token_index() }),
            Err(LexingError::InvalidCharacter) => {
                let character = self.source[self.token_start..].chars().next().unwrap_or_default();
                Err(EvalError::Lex { character,
                                     index: self.token_index() })
            },
        }
    }

    /// Character index (not byte offset) where the last produced token
    /// starts. After [`Token::EndOfInput`] this is the input length in
    /// characters.
    #[must_use]
    pub fn token_index(&self) -> usize {
        self.source[..self.token_start].chars().count()
    }
}

/// Iterates over the tokens of the input, excluding the end marker.
///
/// Iteration stops after the first error.
///
/// # Example
/// ```
/// use calc::interpreter::lexer::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("1+2").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens, vec![Token::Integer(1), Token::AddOp('+'), Token::Integer(2)]);
/// ```
impl Iterator for Lexer<'_> {
    type Item = EvalResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::EndOfInput) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
            token => Some(token),
        }
    }
}
