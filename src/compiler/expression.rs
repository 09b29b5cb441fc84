//! Expression rules for emit mode.
//!
//! The left operand of every binary operator is pushed before the right
//! operand's code is emitted, so the stack traffic follows the textual order
//! of the operators.

use std::io::{Read, Write};

use super::{Compiler, instruction::Instruction};
use crate::{
	error::CradleError,
	scanner::{AddOp, MulOp},
};

impl<R: Read, W: Write> Compiler<R, W> {
	/// Parse an expression, leaving its value in `D0`.
	pub(super) fn expression(&mut self) -> Result<(), CradleError> {
		if self.scanner.at::<AddOp>() {
			self.emit(Instruction::Clear)?;
		} else {
			self.term()?;
		}

		while self.scanner.at::<AddOp>() {
			self.emit(Instruction::Push)?;
			match self.scanner.operator::<AddOp>()? {
				AddOp::Plus => {
					self.term()?;
					self.emit(Instruction::AddPopped)?;
				}
				AddOp::Minus => {
					self.term()?;
					self.emit(Instruction::SubtractPopped)?;
					self.emit(Instruction::Negate)?;
				}
			}
		}
		Ok(())
	}

	/// Parse a term of multiplicative factors.
	fn term(&mut self) -> Result<(), CradleError> {
		self.factor()?;

		while self.scanner.at::<MulOp>() {
			self.emit(Instruction::Push)?;
			match self.scanner.operator::<MulOp>()? {
				MulOp::Star => {
					self.factor()?;
					self.emit(Instruction::MultiplyPopped)?;
				}
				MulOp::Slash => {
					self.factor()?;
					self.emit(Instruction::PopScratch)?;
					self.emit(Instruction::DivideScratch)?;
				}
			}
		}
		Ok(())
	}

	/// Parse a parenthesised expression, an identifier or a constant.
	fn factor(&mut self) -> Result<(), CradleError> {
		match self.scanner.peek() {
			Some('(') => {
				self.scanner.match_symbol('(')?;
				self.expression()?;
				self.scanner.match_symbol(')')
			}
			Some(c) if c.is_ascii_alphabetic() => self.ident(),
			_ => {
				let number = self.scanner.number()?;
				self.emit(Instruction::LoadConstant(number))
			}
		}
	}

	/// A name followed by `()` is a call, otherwise a variable load.
	fn ident(&mut self) -> Result<(), CradleError> {
		let name = self.scanner.name()?;
		if self.scanner.peek() == Some('(') {
			self.scanner.match_symbol('(')?;
			self.scanner.match_symbol(')')?;
			self.emit(Instruction::Call(name))
		} else {
			self.emit(Instruction::LoadVariable(name))
		}
	}

	/// Parse `name = expression` and store `D0` into the name.
	pub(super) fn assignment(&mut self) -> Result<(), CradleError> {
		let name = self.scanner.name()?;
		self.scanner.match_symbol('=')?;
		self.expression()?;
		self.emit(Instruction::LoadAddress(name))?;
		self.emit(Instruction::Store)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{compiler::tests::compile, error::syntax::SyntaxErrorKind, scanner::Dialect};

	fn expression(input: &str, expected: &[&str]) {
		let output = compile(input, |compiler| compiler.expression());
		let lines: Vec<&str> = output.lines().map(|line| line.trim_start_matches('\t')).collect();
		assert_eq!(lines, expected, "compiling {input:?}");
	}

	fn failure(input: &str) -> (SyntaxErrorKind, String) {
		let mut compiler = Compiler::new(input.as_bytes(), Vec::new(), Dialect::CHARACTER).unwrap();
		let error = compiler.expression_program().unwrap_err();
		let kind = error.syntax_kind().cloned().unwrap();
		(kind, String::from_utf8(compiler.into_output()).unwrap())
	}

	#[test]
	fn factors() {
		expression("7", &["MOVE #7,D0"]);
		expression("x", &["MOVE x(PC),D0"]);
		expression("f()", &["BSR f"]);
		expression("((3))", &["MOVE #3,D0"]);
	}

	#[test]
	fn multiplication_binds_tighter() {
		expression(
			"2+3*4",
			&["MOVE #2,D0", "MOVE D0,-(SP)", "MOVE #3,D0", "MOVE D0,-(SP)", "MOVE #4,D0", "MULS (SP)+,D0", "ADD (SP)+,D0"],
		);
	}

	#[test]
	fn parentheses_override_precedence() {
		expression(
			"(2+3)*4",
			&["MOVE #2,D0", "MOVE D0,-(SP)", "MOVE #3,D0", "ADD (SP)+,D0", "MOVE D0,-(SP)", "MOVE #4,D0", "MULS (SP)+,D0"],
		);
	}

	#[test]
	fn operators_associate_left() {
		expression(
			"8-3-1",
			&[
				"MOVE #8,D0",
				"MOVE D0,-(SP)",
				"MOVE #3,D0",
				"SUB (SP)+,D0",
				"NEG D0",
				"MOVE D0,-(SP)",
				"MOVE #1,D0",
				"SUB (SP)+,D0",
				"NEG D0",
			],
		);
		expression("a/b", &["MOVE a(PC),D0", "MOVE D0,-(SP)", "MOVE b(PC),D0", "MOVE (SP)+,D1", "DIVS D1,D0"]);
	}

	#[test]
	fn leading_sign_clears_the_accumulator() {
		expression("-1", &["CLR D0", "MOVE D0,-(SP)", "MOVE #1,D0", "SUB (SP)+,D0", "NEG D0"]);
		expression("+x", &["CLR D0", "MOVE D0,-(SP)", "MOVE x(PC),D0", "ADD (SP)+,D0"]);
	}

	#[test]
	fn calls_mix_with_arithmetic() {
		expression("g()*x", &["BSR g", "MOVE D0,-(SP)", "MOVE x(PC),D0", "MULS (SP)+,D0"]);
	}

	#[test]
	fn missing_operand_keeps_earlier_output() {
		let (kind, output) = failure("2+");
		assert_eq!(kind, SyntaxErrorKind::NumberExpected { found: None });
		assert_eq!(output, "\tMOVE #2,D0\n\tMOVE D0,-(SP)\n");
	}

	#[test]
	fn unbalanced_parentheses() {
		let (kind, _) = failure("(1+2");
		assert_eq!(kind, SyntaxErrorKind::UnexpectedSymbol { expected: ')', found: None });

		let (kind, _) = failure("f(1)");
		assert_eq!(kind, SyntaxErrorKind::UnexpectedSymbol { expected: ')', found: Some('1') });
	}

	#[test]
	fn assignments_store_through_a0() {
		let output = compile("a=b-2", |compiler| compiler.assignment());
		assert_eq!(
			output,
			"\tMOVE b(PC),D0\n\tMOVE D0,-(SP)\n\tMOVE #2,D0\n\tSUB (SP)+,D0\n\tNEG D0\n\tLEA a(PC),A0\n\tMOVE D0,(A0)\n"
		);

		let mut compiler = Compiler::new("a+1".as_bytes(), Vec::new(), Dialect::CHARACTER).unwrap();
		let error = compiler.assignment_program().unwrap_err();
		assert_eq!(error.syntax_kind(), Some(&SyntaxErrorKind::UnexpectedSymbol { expected: '=', found: Some('+') }));
	}
}
