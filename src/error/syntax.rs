use std::fmt::{self, Display};

/// A grammar violation anchored at the lookahead position.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: {kind}")]
pub struct SyntaxError {
	/// Line of the offending lookahead, starting at 1.
	line:   usize,
	/// Column of the offending lookahead, starting at 1.
	column: usize,
	kind:   SyntaxErrorKind,
}

impl SyntaxError {
	pub fn new(line: usize, column: usize, kind: SyntaxErrorKind) -> Self { Self { line, column, kind } }

	pub fn kind(&self) -> &SyntaxErrorKind { &self.kind }

	pub fn line(&self) -> usize { self.line }

	pub fn column(&self) -> usize { self.column }
}

/// Types of grammar violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
	/// The lookahead is not the literal symbol the grammar requires.
	UnexpectedSymbol { expected: char, found: Option<char> },
	/// A name must start here.
	NameExpected { found: Option<char> },
	/// A number must start here.
	NumberExpected { found: Option<char> },
	/// An operator dispatch saw a symbol outside its class.
	UnknownOperator { class: &'static str, found: Option<char> },
	/// Input stopped before the construct that ends the program.
	MissingTerminator { expected: &'static str, found: Option<char> },
	/// A numeric literal does not fit in an `i64`.
	NumberOutOfRange,
	/// The source bytes are not valid UTF-8.
	InvalidEncoding,
}

impl Display for SyntaxErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use SyntaxErrorKind::*;
		match self {
			UnexpectedSymbol { expected, found } => {
				write!(f, "`{}` expected, found {}", expected.escape_debug(), Found(*found))
			}
			NameExpected { found } => write!(f, "name expected, found {}", Found(*found)),
			NumberExpected { found } => write!(f, "number expected, found {}", Found(*found)),
			UnknownOperator { class, found } => write!(f, "{class} expected, found {}", Found(*found)),
			MissingTerminator { expected, found } => write!(f, "{expected} expected, found {}", Found(*found)),
			NumberOutOfRange => write!(f, "number out of range"),
			InvalidEncoding => write!(f, "source is not valid UTF-8"),
		}
	}
}

/// Renders a lookahead for diagnostics.
struct Found(Option<char>);

impl Display for Found {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(c) => write!(f, "`{}`", c.escape_debug()),
			None => write!(f, "end of input"),
		}
	}
}
