//! Statement and block rules for emit mode.

use std::io::{Read, Write};

use super::{Compiler, instruction::Instruction, label::Label};
use crate::{
	error::{CradleError, syntax::SyntaxErrorKind},
	scanner::Keyword,
};

impl<R: Read, W: Write> Compiler<R, W> {
	/// A program is a block closed by `e`, which becomes the `END` directive.
	pub(super) fn program(&mut self) -> Result<(), CradleError> {
		self.block()?;
		if self.scanner.keyword() != Some(Keyword::End) {
			return Err(
				self.scanner.error(SyntaxErrorKind::MissingTerminator { expected: "END", found: self.scanner.peek() })
			);
		}
		self.emit(Instruction::End)
	}

	/// Statements up to the keyword that closes the enclosing construct.
	fn block(&mut self) -> Result<(), CradleError> {
		while self.scanner.peek().is_some() {
			match self.scanner.keyword() {
				Some(Keyword::If) => self.conditional()?,
				Some(keyword) if keyword.ends_block() => break,
				_ => self.other()?,
			}
		}
		Ok(())
	}

	/// `i <condition> block [l block] e`
	fn conditional(&mut self) -> Result<(), CradleError> {
		self.scanner.match_symbol(Keyword::If.symbol())?;
		self.condition()?;
		let skip = self.labels.allocate();
		self.emit(Instruction::BranchIfEqual(skip))?;
		self.block()?;

		let mut exit = skip;
		if self.scanner.keyword() == Some(Keyword::Else) {
			self.scanner.match_symbol(Keyword::Else.symbol())?;
			exit = self.labels.allocate();
			self.emit(Instruction::Branch(exit))?;
			self.post_label(skip)?;
			self.block()?;
		}

		self.scanner.match_symbol(Keyword::End.symbol())?;
		self.post_label(exit)
	}

	/// Conditions have no grammar yet, only a marker in the output.
	fn condition(&mut self) -> Result<(), CradleError> { self.emit(Instruction::Condition) }

	/// Any other statement is a single name, copied through.
	fn other(&mut self) -> Result<(), CradleError> {
		let name = self.scanner.name()?;
		self.emit(Instruction::Passthrough(name))
	}

	fn post_label(&mut self, label: Label) -> Result<(), CradleError> {
		self.labels.post(label)?;
		Ok(self.emitter.post_label(label)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{compiler::tests::compile, scanner::Dialect};

	fn program(input: &str) -> String { compile(input, |compiler| compiler.block_program()) }

	fn failure(input: &str) -> SyntaxErrorKind {
		let mut compiler = Compiler::new(input.as_bytes(), Vec::new(), Dialect::CHARACTER).unwrap();
		compiler.block_program().unwrap_err().syntax_kind().cloned().unwrap()
	}

	#[test]
	fn empty_program() {
		assert_eq!(program("e"), "\tEND\n");
		assert_eq!(failure(""), SyntaxErrorKind::MissingTerminator { expected: "END", found: None });
	}

	#[test]
	fn other_statements_pass_through() {
		assert_eq!(program("abce"), "\ta\n\tb\n\tc\n\tEND\n");
		assert_eq!(failure("a1e"), SyntaxErrorKind::NameExpected { found: Some('1') });
	}

	#[test]
	fn if_without_else() {
		assert_eq!(program("iAee"), "\t<condition>\n\tBEQ L00\n\tA\nL00:\n\tEND\n");
	}

	#[test]
	fn if_with_else() {
		let mut compiler = Compiler::new("iAlBee".as_bytes(), Vec::new(), Dialect::CHARACTER).unwrap();
		compiler.block_program().unwrap();
		assert_eq!(compiler.labels().allocated(), 2);
		assert_eq!(compiler.labels().posted(), 2);
		assert_eq!(
			String::from_utf8(compiler.into_output()).unwrap(),
			"\t<condition>\n\tBEQ L00\n\tA\n\tBRA L01\nL00:\n\tB\nL01:\n\tEND\n"
		);
	}

	#[test]
	fn nested_conditionals() {
		assert_eq!(
			program("iAiBlCeDee"),
			"\t<condition>\n\tBEQ L00\n\tA\n\t<condition>\n\tBEQ L01\n\tB\n\tBRA L02\nL01:\n\tC\nL02:\n\tD\nL00:\n\tEND\n"
		);
	}

	#[test]
	fn unbalanced_blocks() {
		assert_eq!(failure("le"), SyntaxErrorKind::MissingTerminator { expected: "END", found: Some('l') });
		assert_eq!(failure("iA"), SyntaxErrorKind::UnexpectedSymbol { expected: 'e', found: None });
		assert_eq!(failure("iAlBlCee"), SyntaxErrorKind::UnexpectedSymbol { expected: 'e', found: Some('l') });
	}
}
