//! Emit mode: parse and generate code in the same walk.
//!
//! Each grammar rule is a method that consumes its part of the source through
//! the `Scanner` and writes the matching instructions through the `Emitter`
//! before returning. No tree is built and no emitted line is ever revisited,
//! so the order of the output is exactly the order in which rules finish
//! their work.
//!
//! ``` BNF
//! expression → ( "+" | "-" )? term ( ( "+" | "-" ) term )* ;
//! term       → factor ( ( "*" | "/" ) factor )* ;
//! factor     → "(" expression ")" | ident | NUMBER ;
//! ident      → NAME ( "(" ")" )? ;
//! assignment → NAME "=" expression ;
//! program    → block "e" ;
//! block      → ( if | other )* ;
//! if         → "i" condition block ( "l" block )? "e" ;
//! ```

mod block;
pub mod emitter;
mod expression;
pub mod instruction;
pub mod label;

use std::io::{Read, Write};

use tracing::debug;

use self::{emitter::Emitter, instruction::Instruction, label::LabelAllocator};
use crate::{
	error::{CradleError, syntax::SyntaxErrorKind},
	scanner::{Dialect, Scanner},
};

/// A single-pass compiler writing 68000-style assembly text.
pub struct Compiler<R, W> {
	scanner: Scanner<R>,
	emitter: Emitter<W>,
	labels:  LabelAllocator,
}

impl<R: Read, W: Write> Compiler<R, W> {
	/// Create a compiler with a primed lookahead.
	pub fn new(source: R, output: W, dialect: Dialect) -> Result<Self, CradleError> {
		Ok(Self { scanner: Scanner::new(source, dialect)?, emitter: Emitter::new(output), labels: LabelAllocator::new() })
	}

	/// Compile one expression that must be followed by a line break or the
	/// end of input.
	pub fn expression_program(&mut self) -> Result<(), CradleError> {
		debug!(dialect = ?self.scanner.dialect(), "compiling expression");
		self.expression()?;
		self.end_of_line()?;
		debug!(lines = self.emitter.lines(), "expression compiled");
		Ok(())
	}

	/// Compile one assignment that must be followed by a line break or the
	/// end of input.
	pub fn assignment_program(&mut self) -> Result<(), CradleError> {
		debug!(dialect = ?self.scanner.dialect(), "compiling assignment");
		self.assignment()?;
		self.end_of_line()?;
		debug!(lines = self.emitter.lines(), "assignment compiled");
		Ok(())
	}

	/// Compile a block-structured program terminated by `e`.
	pub fn block_program(&mut self) -> Result<(), CradleError> {
		debug!(dialect = ?self.scanner.dialect(), "compiling program");
		self.program()?;
		debug!(lines = self.emitter.lines(), labels = self.labels.allocated(), "program compiled");
		Ok(())
	}

	pub fn labels(&self) -> &LabelAllocator { &self.labels }

	/// Lines emitted so far.
	pub fn emitted(&self) -> usize { self.emitter.lines() }

	pub fn flush(&mut self) -> Result<(), CradleError> { Ok(self.emitter.flush()?) }

	pub fn into_output(self) -> W { self.emitter.into_inner() }

	fn emit(&mut self, instruction: Instruction) -> Result<(), CradleError> { Ok(self.emitter.emit(instruction)?) }

	/// The single-line programs stop at a line break; anything else left over
	/// means the expression ended early.
	fn end_of_line(&self) -> Result<(), CradleError> {
		match self.scanner.peek() {
			None | Some('\n' | '\r') => Ok(()),
			found => Err(self.scanner.error(SyntaxErrorKind::MissingTerminator { expected: "newline", found })),
		}
	}
}
