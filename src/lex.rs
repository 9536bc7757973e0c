use std::{fmt::Display, iter::Peekable, str::CharIndices};

#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source_data: &'src str,
    source: Peekable<CharIndices<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source_data: source,
            source: source.char_indices().peekable(),
        }
    }

    /// Scans the next token, advancing past it. Once the end of the input is
    /// reached every further call keeps returning `EndOfInput`.
    pub fn next_token(&mut self) -> Token<'src> {
        // Whitespace never reaches the parser
        while self.source.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let Some((start, c)) = self.source.next() else {
            return Token {
                kind: TokenKind::EndOfInput,
                lexeme: "",
            };
        };

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,

            // Numbers must not start with a zero
            '1'..='9' => {
                self.consume_while(char::is_ascii_digit);
                TokenKind::Number
            }

            _ => TokenKind::Invalid,
        };

        Token {
            kind,
            lexeme: self.lexeme_from(start),
        }
    }

    fn consume_while(&mut self, f: impl Fn(&char) -> bool) {
        while self.source.next_if(|(_, c)| f(c)).is_some() {}
    }

    /// Retrieves the lexeme from the source data, extracting either the span
    /// up to the cursor or the remaining span if the token is the last.
    fn lexeme_from(&mut self, start: usize) -> &'src str {
        if let Some((end, _)) = self.source.peek() {
            &self.source_data[start..*end]
        } else {
            &self.source_data[start..]
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Invalid,
    EndOfInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
}

impl<'src> Display for Token<'src> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let TokenKind::EndOfInput = self.kind {
            write!(f, "end of input")
        } else {
            write!(f, "\"{}\"", self.lexeme)
        }
    }
}
