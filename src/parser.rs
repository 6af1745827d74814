//! Implements a parser for first-order formulae in the crate's surface syntax.
//!
//! The module provides a parser for first-order formulae by implementing [`FromStr`] for
//! [`Fof`]. The parser is often used implicitly through the [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into a [`Fof`]:
//! ```rust
//! use clausal::syntax::Fof;
//!
//! // parse a string into `Fof`:
//! let formula: Fof = "exists x. P(x) & Q(x)".parse().unwrap();
//!
//! assert_eq!("∃ x. (P(x) ∧ Q(x))", formula.to_string());
//! ```
//!
//! [`Fof`]: crate::syntax::Fof
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::Fof;
use lalrpop_util::ParseError;
use std::str::FromStr;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Comma,
    Dot,
    LParen,
    RParen,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Forall,
    Exists,
    Lower,
    Upper,
    Const,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        // expected terminals are reported with their names quoted:
        match s.as_ref().trim_matches('"') {
            "_COMMA_" => Self::Comma,
            "_DOT_" => Self::Dot,
            "_LPAREN_" => Self::LParen,
            "_RPAREN_" => Self::RParen,
            "_NOT_" => Self::Not,
            "_AND_" => Self::And,
            "_OR_" => Self::Or,
            "_IMPLIES_" => Self::Implies,
            "_IFF_" => Self::Iff,
            "_FORALL_" => Self::Forall,
            "_EXISTS_" => Self::Exists,
            "_LOWER_" => Self::Lower,
            "_UPPER_" => Self::Upper,
            "_CONST_" => Self::Const,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Not => "`not`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::Implies => "`implies`",
            Self::Iff => "`iff`",
            Self::Forall => "`forall`",
            Self::Exists => "`exists`",
            Self::Lower => "`lowercase identifier`",
            Self::Upper => "`uppercase identifier`",
            Self::Const => "`constant identifier`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(thiserror::Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEof {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].clone(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct Position {
    line: usize,
    column: usize,
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let index = self
            .lines
            .iter()
            .enumerate()
            .find(|&(_, l)| location < *l)
            .map(|(i, _)| i);
        let line = index.unwrap_or(self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    fn convert_error<T: ToString>(&self, error: ParseError<usize, T, Error>) -> Error {
        match error {
            ParseError::InvalidToken { location } => {
                let pos = self.position(location);
                Error::InvalidToken {
                    position: Position {
                        line: pos.line,
                        column: pos.column,
                    },
                }
            }
            ParseError::UnrecognizedEof { location, expected } => {
                let pos = self.position(location);
                Error::UnrecognizedEof {
                    position: Position {
                        line: pos.line,
                        column: pos.column,
                    },
                    expected: expected.into_iter().map(From::from).collect(),
                }
            }
            ParseError::UnrecognizedToken { token, expected } => {
                let pos = self.position(token.0);
                Error::UnrecognizedToken {
                    position: Position {
                        line: pos.line,
                        column: pos.column,
                    },
                    expected: expected.into_iter().map(From::from).collect(),
                    found: token.1.to_string(),
                }
            }
            ParseError::ExtraToken { token } => {
                let pos = self.position(token.0);
                Error::ExtraToken {
                    position: Position {
                        line: pos.line,
                        column: pos.column,
                    },
                    found: token.1.to_string(),
                }
            }
            ParseError::User { error } => error,
        }
    }
}

impl FromStr for Fof {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::FormulaParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e))
    }
}
