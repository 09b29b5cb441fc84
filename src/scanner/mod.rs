//! The input cursor and the lexical primitives every grammar rule leans on.
//!
//! There is no token stream. The scanner holds exactly one unconsumed
//! character, the `lookahead`, and every decision the grammar makes is a
//! comparison against it. Consuming a name, a number or an expected symbol
//! pulls the next character from the source.
//!
//! How much of the source counts as one token is a matter of `Dialect`:
//! early programs read one letter or one digit and never skip blanks, so
//! `a + b` is a syntax error there while `a+b` is fine. The token-based
//! dialect reads whole alphanumeric runs and skips spaces and tabs after
//! every token it consumes.
mod dialect;
mod symbol;

use std::io::{Bytes, Read};

pub use dialect::*;
pub use symbol::*;

use crate::error::{
	CradleError,
	syntax::{SyntaxError, SyntaxErrorKind},
};

/// A one-character lookahead scanner over a byte source
pub struct Scanner<R> {
	/// Remaining source bytes
	source:    Bytes<R>,
	/// The next unread character, `None` once the source is exhausted
	lookahead: Option<char>,
	/// Line of the lookahead, starting at 1
	line:      usize,
	/// Column of the lookahead, starting at 1
	column:    usize,
	dialect:   Dialect,
}

impl<R: Read> Scanner<R> {
	/// Create a scanner and prime the lookahead.
	pub fn new(source: R, dialect: Dialect) -> Result<Self, CradleError> {
		let mut scanner = Self { source: source.bytes(), lookahead: None, line: 1, column: 0, dialect };
		scanner.advance()?;
		scanner.skip_white()?;
		Ok(scanner)
	}

	/// The next unconsumed character.
	pub fn peek(&self) -> Option<char> { self.lookahead }

	pub fn dialect(&self) -> Dialect { self.dialect }

	/// Replace the lookahead with the next source character.
	pub fn advance(&mut self) -> Result<(), CradleError> {
		if self.lookahead == Some('\n') {
			self.line += 1;
			self.column = 0;
		}
		self.column += 1;
		self.lookahead = self.next_char()?;
		Ok(())
	}

	/// Decode one UTF-8 character from the source.
	fn next_char(&mut self) -> Result<Option<char>, CradleError> {
		let Some(first) = self.source.next().transpose()? else {
			return Ok(None);
		};
		let width = match first {
			0x00..=0x7f => return Ok(Some(char::from(first))),
			0xc0..=0xdf => 2,
			0xe0..=0xef => 3,
			0xf0..=0xf7 => 4,
			_ => return Err(self.error(SyntaxErrorKind::InvalidEncoding)),
		};
		let mut buffer = [first, 0, 0, 0];
		for slot in &mut buffer[1..width] {
			match self.source.next().transpose()? {
				Some(byte) => *slot = byte,
				None => return Err(self.error(SyntaxErrorKind::InvalidEncoding)),
			}
		}
		std::str::from_utf8(&buffer[..width])
			.ok()
			.and_then(|text| text.chars().next())
			.map(Some)
			.ok_or_else(|| self.error(SyntaxErrorKind::InvalidEncoding))
	}

	/// Skip spaces and tabs, but only when the dialect asks for it.
	pub fn skip_white(&mut self) -> Result<(), CradleError> {
		if self.dialect.spacing == Spacing::SkipBlanks {
			while matches!(self.lookahead, Some(' ' | '\t')) {
				self.advance()?;
			}
		}
		Ok(())
	}

	/// Skip everything that may separate two interpreter statements.
	pub fn skip_separators(&mut self) -> Result<(), CradleError> {
		while matches!(self.lookahead, Some(' ' | '\t' | '\r' | '\n')) {
			self.advance()?;
		}
		Ok(())
	}

	/// Consume `expected` or fail without consuming anything.
	pub fn match_symbol(&mut self, expected: char) -> Result<(), CradleError> {
		if self.lookahead != Some(expected) {
			return Err(self.error(SyntaxErrorKind::UnexpectedSymbol { expected, found: self.lookahead }));
		}
		self.advance()?;
		self.skip_white()
	}

	/// Consume a name, one letter or a maximal alphanumeric run depending on
	/// the dialect.
	pub fn name(&mut self) -> Result<String, CradleError> {
		if !self.lookahead.is_some_and(|c| c.is_ascii_alphabetic()) {
			return Err(self.error(SyntaxErrorKind::NameExpected { found: self.lookahead }));
		}
		let name = self.collect(self.dialect.names, |c| c.is_ascii_alphanumeric())?;
		self.skip_white()?;
		Ok(name)
	}

	/// Consume a numeric literal as text.
	pub fn number(&mut self) -> Result<String, CradleError> {
		if !self.lookahead.is_some_and(|c| c.is_ascii_digit()) {
			return Err(self.error(SyntaxErrorKind::NumberExpected { found: self.lookahead }));
		}
		let number = self.collect(self.dialect.numbers, |c| c.is_ascii_digit())?;
		self.skip_white()?;
		Ok(number)
	}

	/// Consume a single letter, upper-cased. Interpreter names are always one
	/// letter wide since they index a 26-slot table.
	pub fn letter(&mut self) -> Result<char, CradleError> {
		let letter = match self.lookahead {
			Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
			found => return Err(self.error(SyntaxErrorKind::NameExpected { found })),
		};
		self.advance()?;
		self.skip_white()?;
		Ok(letter)
	}

	/// Consume a whole digit run, folding it into an integer as it is read.
	pub fn integer(&mut self) -> Result<i64, CradleError> {
		if !self.lookahead.is_some_and(|c| c.is_ascii_digit()) {
			return Err(self.error(SyntaxErrorKind::NumberExpected { found: self.lookahead }));
		}
		let mut value: i64 = 0;
		while let Some(digit) = self.lookahead.and_then(|c| c.to_digit(10)) {
			value = value
				.checked_mul(10)
				.and_then(|v| v.checked_add(i64::from(digit)))
				.ok_or_else(|| self.error(SyntaxErrorKind::NumberOutOfRange))?;
			self.advance()?;
		}
		self.skip_white()?;
		Ok(value)
	}

	/// Whether the lookahead opens an operator of class `O`.
	pub fn at<O: Operator>(&self) -> bool { self.lookahead.and_then(O::from_symbol).is_some() }

	/// Consume an operator of class `O`.
	pub fn operator<O: Operator>(&mut self) -> Result<O, CradleError> {
		let operator = self
			.lookahead
			.and_then(O::from_symbol)
			.ok_or_else(|| self.error(SyntaxErrorKind::UnknownOperator { class: O::CLASS, found: self.lookahead }))?;
		self.match_symbol(operator.symbol())?;
		Ok(operator)
	}

	/// The keyword the lookahead stands for, if any.
	pub fn keyword(&self) -> Option<Keyword> { self.lookahead.and_then(Keyword::from_symbol) }

	/// Build a diagnostic anchored at the lookahead.
	pub fn error(&self, kind: SyntaxErrorKind) -> CradleError {
		SyntaxError::new(self.line, self.column, kind).into()
	}

	/// Accumulate one character, or a run of characters satisfying `accept`.
	fn collect(&mut self, width: Width, accept: impl Fn(char) -> bool) -> Result<String, CradleError> {
		let mut text = String::new();
		while let Some(c) = self.lookahead.filter(|&c| accept(c)) {
			text.push(c);
			self.advance()?;
			if width == Width::Single {
				break;
			}
		}
		Ok(text)
	}
}
