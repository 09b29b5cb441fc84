//! Evaluate mode: the same expression grammar, computing values instead of
//! emitting code.
//!
//! A program is a list of statements ended by `.`:
//!
//! ``` BNF
//! program    → ( statement separator* )* "." ;
//! statement  → "?" LETTER | "!" LETTER | LETTER "=" expression ;
//! expression → ( "+" | "-" )? term ( ( "+" | "-" ) term )* ;
//! term       → factor ( ( "*" | "/" ) factor )* ;
//! factor     → "(" expression ")" | LETTER | INTEGER ;
//! ```
//!
//! Every letter names one slot of a flat `SymbolTable`. There is no scoping
//! and no declaration: an unassigned slot reads as zero.

mod input;
mod table;

use std::io::{Read, Write};

use anyhow::Context;
use tracing::{debug, trace};

pub use self::{
	input::{LineInput, ValueInput},
	table::SymbolTable,
};
use crate::{
	error::{CradleError, runtime::RuntimeError, syntax::SyntaxErrorKind},
	scanner::{AddOp, Dialect, Directive, MulOp, Operator, Scanner, Spacing},
};

/// How a statement list stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	/// The `.` terminator was reached.
	Halted,
	/// The source ran out first.
	Exhausted,
}

/// Interpreter holding the symbol table and its I/O channels.
pub struct Interpreter<W, I> {
	table:   SymbolTable,
	output:  W,
	input:   I,
	dialect: Dialect,
}

impl<W: Write, I: ValueInput> Interpreter<W, I> {
	pub fn new(output: W, input: I) -> Self {
		Self { table: SymbolTable::new(), output, input, dialect: Dialect::INTERPRETER }
	}

	/// Allow blanks inside statements as well as between them.
	pub fn with_spacing(mut self, spacing: Spacing) -> Self {
		self.dialect = self.dialect.with_spacing(spacing);
		self
	}

	/// Run a whole program; it must end with `.`.
	pub fn run<R: Read>(&mut self, source: R) -> Result<(), CradleError> {
		let mut scanner = Scanner::new(source, self.dialect)?;
		debug!("interpreting program");
		let flow = self.statements(&mut scanner);
		self.output.flush()?;
		match flow? {
			Flow::Halted => {
				debug!("program halted");
				Ok(())
			}
			Flow::Exhausted => {
				Err(scanner.error(SyntaxErrorKind::MissingTerminator { expected: "`.`", found: scanner.peek() }))
			}
		}
	}

	/// Run statements until `.` or the end of `source`, keeping the table for
	/// the next call.
	pub fn run_partial<R: Read>(&mut self, source: R) -> Result<Flow, CradleError> {
		let mut scanner = Scanner::new(source, self.dialect)?;
		let flow = self.statements(&mut scanner);
		self.output.flush()?;
		flow
	}

	pub fn table(&self) -> &SymbolTable { &self.table }

	pub fn into_output(self) -> W { self.output }

	fn statements<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<Flow, CradleError> {
		scanner.skip_separators()?;
		while let Some(c) = scanner.peek() {
			match Directive::from_symbol(c) {
				Some(Directive::Halt) => return Ok(Flow::Halted),
				Some(Directive::Input) => self.input_statement(scanner)?,
				Some(Directive::Output) => self.output_statement(scanner)?,
				None => self.assignment(scanner)?,
			}
			scanner.skip_separators()?;
		}
		Ok(Flow::Exhausted)
	}

	/// `?x` stores the next input value in `x`.
	fn input_statement<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<(), CradleError> {
		scanner.match_symbol(Directive::Input.symbol())?;
		let name = scanner.letter()?;
		let value = self.input.read_value(name)?;
		self.store(name, value)
	}

	/// `!x` prints the value of `x` on its own line.
	fn output_statement<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<(), CradleError> {
		scanner.match_symbol(Directive::Output.symbol())?;
		let name = scanner.letter()?;
		let value = self.load(name)?;
		writeln!(self.output, "{value}")?;
		Ok(())
	}

	fn assignment<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<(), CradleError> {
		let name = scanner.letter()?;
		scanner.match_symbol('=')?;
		let value = self.expression(scanner)?;
		self.store(name, value)
	}

	fn expression<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<i64, CradleError> {
		let mut value = if scanner.at::<AddOp>() { 0 } else { self.term(scanner)? };

		while scanner.at::<AddOp>() {
			let operator = scanner.operator::<AddOp>()?;
			let right = self.term(scanner)?;
			value = match operator {
				AddOp::Plus => value.checked_add(right),
				AddOp::Minus => value.checked_sub(right),
			}
			.ok_or(RuntimeError::Overflow(operator.symbol()))?;
		}
		Ok(value)
	}

	fn term<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<i64, CradleError> {
		let mut value = self.factor(scanner)?;

		while scanner.at::<MulOp>() {
			let operator = scanner.operator::<MulOp>()?;
			let right = self.factor(scanner)?;
			value = match operator {
				MulOp::Star => value.checked_mul(right),
				MulOp::Slash if right == 0 => return Err(RuntimeError::DivisionByZero.into()),
				MulOp::Slash => value.checked_div(right),
			}
			.ok_or(RuntimeError::Overflow(operator.symbol()))?;
		}
		Ok(value)
	}

	fn factor<R: Read>(&mut self, scanner: &mut Scanner<R>) -> Result<i64, CradleError> {
		match scanner.peek() {
			Some('(') => {
				scanner.match_symbol('(')?;
				let value = self.expression(scanner)?;
				scanner.match_symbol(')')?;
				Ok(value)
			}
			Some(c) if c.is_ascii_alphabetic() => {
				let name = scanner.letter()?;
				self.load(name)
			}
			_ => scanner.integer(),
		}
	}

	fn load(&self, name: char) -> Result<i64, CradleError> {
		Ok(self.table.get(name).with_context(|| format!("no slot for `{name}`"))?)
	}

	fn store(&mut self, name: char, value: i64) -> Result<(), CradleError> {
		self.table.set(name, value).with_context(|| format!("no slot for `{name}`"))?;
		trace!(%name, value, "stored");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn run(source: &str, input: &str) -> Result<String, CradleError> {
		let mut interpreter = Interpreter::new(Vec::new(), LineInput::new(input.as_bytes()));
		interpreter.run(source.as_bytes())?;
		Ok(String::from_utf8(interpreter.into_output()).unwrap())
	}

	fn evaluate(expression: &str) -> i64 {
		let mut interpreter = Interpreter::new(Vec::new(), LineInput::new("".as_bytes()));
		interpreter.run(format!("a={expression}\n.").as_bytes()).unwrap();
		interpreter.table().get('a').unwrap()
	}

	fn runtime_error(source: &str) -> RuntimeError {
		match run(source, "") {
			Err(CradleError::Runtime(error)) => error,
			other => panic!("expected a runtime error, got {other:?}"),
		}
	}

	#[test]
	fn assignments_then_output() {
		assert_eq!(run("a=3 b=4 !a !b .", "").unwrap(), "3\n4\n");
		assert_eq!(run("a=3\nb=a*a\n!b\n.", "").unwrap(), "9\n");
	}

	#[test]
	fn only_the_terminator() {
		assert_eq!(run(".", "").unwrap(), "");
	}

	#[test]
	fn precedence_and_grouping() {
		assert_eq!(evaluate("2+3*4"), 14);
		assert_eq!(evaluate("(2+3)*4"), 20);
		assert_eq!(evaluate("8-3-1"), 4);
		assert_eq!(evaluate("100/7/2"), 7);
		assert_eq!(evaluate("-5+2"), -3);
		assert_eq!(evaluate("+12"), 12);
		assert_eq!(evaluate("-7/2"), -3);
	}

	#[test]
	fn names_are_case_insensitive() {
		assert_eq!(run("x=5 !X .", "").unwrap(), "5\n");
		assert_eq!(run("!z .", "").unwrap(), "0\n");
	}

	#[test]
	fn input_statements_read_values() {
		assert_eq!(run("?a ?b c=a*b !c .", "6\n7\n").unwrap(), "42\n");
		assert!(matches!(runtime_error("?a ."), RuntimeError::InputExhausted('A')));
	}

	#[test]
	fn arithmetic_faults() {
		assert_eq!(runtime_error("a=1/0 ."), RuntimeError::DivisionByZero);
		assert_eq!(runtime_error("a=9223372036854775807+1 ."), RuntimeError::Overflow('+'));
		assert_eq!(runtime_error("a=3037000500*3037000500 ."), RuntimeError::Overflow('*'));
	}

	#[test]
	fn missing_terminator() {
		let error = run("a=1", "").unwrap_err();
		assert_eq!(error.syntax_kind(), Some(&SyntaxErrorKind::MissingTerminator { expected: "`.`", found: None }));
	}

	#[test]
	fn output_before_a_failure_is_kept() {
		let mut interpreter = Interpreter::new(Vec::new(), LineInput::new("".as_bytes()));
		let error = interpreter.run("a=2 !a b=+ .".as_bytes()).unwrap_err();
		assert_eq!(error.syntax_kind(), Some(&SyntaxErrorKind::NumberExpected { found: Some(' ') }));
		assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "2\n");
	}

	#[test]
	fn blanks_inside_statements_need_skip_blanks() {
		let mut interpreter = Interpreter::new(Vec::new(), LineInput::new("".as_bytes()));
		assert!(interpreter.run("a = 1 .".as_bytes()).is_err());

		let mut interpreter =
			Interpreter::new(Vec::new(), LineInput::new("".as_bytes())).with_spacing(Spacing::SkipBlanks);
		interpreter.run("a = 1 + 2 !a .".as_bytes()).unwrap();
		assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "3\n");
	}

	#[test]
	fn partial_runs_share_the_table() {
		let mut interpreter = Interpreter::new(Vec::new(), LineInput::new("".as_bytes()));
		assert_eq!(interpreter.run_partial("a=4".as_bytes()).unwrap(), Flow::Exhausted);
		assert_eq!(interpreter.run_partial("b=a+1 !b".as_bytes()).unwrap(), Flow::Exhausted);
		assert_eq!(interpreter.run_partial(".".as_bytes()).unwrap(), Flow::Halted);
		assert_eq!(String::from_utf8(interpreter.into_output()).unwrap(), "5\n");
	}
}
