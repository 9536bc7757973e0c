use std::mem::replace;

use crate::{
    ast::{BinOp, Expr},
    lex::{Lexer, Token, TokenKind},
};

/// Inspects the lookahead against a pattern, consuming and returning it on a
/// match - otherwise returns a copy of the lookahead without consuming it.
macro_rules! chase {
    ($parser:expr, $pattern:pat $(,)?) => {{
        if matches!($parser.current.kind, $pattern) {
            Found($parser.advance())
        } else {
            NotFound($parser.current)
        }
    }};
}

/// The type returned by the `chase!` macro.
enum Chased<'src> {
    Found(Token<'src>),
    NotFound(Token<'src>),
}
use Chased::*;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ParseError<'src> {
    #[error("Expected a number instead of {0}.")]
    ExpectedNumber(Token<'src>),

    #[error("Number literal {0} failed to parse.")]
    InvalidNumber(Token<'src>),

    #[error("Unexpected {0} after a complete expression.")]
    TrailingInput(Token<'src>),
}

/// A recursive-descent parser over a single line of input.
///
/// Grammar, with the usual precedence and left-associativity:
///
/// ```text
/// start  := expr EndOfInput
/// expr   := term ( ('+' | '-') term )*
/// term   := number ( ('*' | '/') number )*
/// number := NUMBER-token
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    error: Option<ParseError<'src>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            error: None,
        }
    }

    /// Parses the line into a single expression tree.
    ///
    /// The first failure on a line wins: later failures never replace an
    /// already recorded one. Any partially built tree is dropped here before
    /// the error is handed back.
    pub fn parse(mut self) -> Result<Expr, ParseError<'src>> {
        let root = self.parse_expr();

        if self.current.kind != TokenKind::EndOfInput {
            self.record(ParseError::TrailingInput(self.current));
        }

        match self.error {
            Some(error) => Err(error),
            None => Ok(root.expect("a parse without errors produces a tree")),
        }
    }

    fn parse_expr(&mut self) -> Option<Expr> {
        let mut left = self.parse_term()?;

        while let Found(token) = chase!(self, TokenKind::Plus | TokenKind::Minus) {
            // The operator is consumed even when the right operand fails; the
            // prefix parsed so far is handed back and the recorded error ends
            // the line.
            let Some(right) = self.parse_term() else {
                return Some(left);
            };

            left = Expr::Binary {
                op: BinOp::from(&token),
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Some(left)
    }

    fn parse_term(&mut self) -> Option<Expr> {
        let mut left = self.parse_number()?;

        while let Found(token) = chase!(self, TokenKind::Star | TokenKind::Slash) {
            let Some(right) = self.parse_number() else {
                return Some(left);
            };

            left = Expr::Binary {
                op: BinOp::from(&token),
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Some(left)
    }

    fn parse_number(&mut self) -> Option<Expr> {
        match chase!(self, TokenKind::Number) {
            Found(token) => match token.lexeme.parse() {
                Ok(value) => Some(Expr::Number(value)),
                Err(_) => {
                    self.record(ParseError::InvalidNumber(token));
                    None
                }
            },
            NotFound(token) => {
                self.record(ParseError::ExpectedNumber(token));
                None
            }
        }
    }

    fn advance(&mut self) -> Token<'src> {
        replace(&mut self.current, self.lexer.next_token())
    }

    fn record(&mut self, error: ParseError<'src>) {
        // First error wins
        self.error.get_or_insert(error);
    }
}
