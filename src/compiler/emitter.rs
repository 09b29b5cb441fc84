use std::io::Write;

use super::{instruction::Instruction, label::Label};

/// Writes instruction lines as they are produced.
///
/// Nothing is buffered on the translator side: when a later grammar rule
/// fails, the lines written so far stay in the output.
pub struct Emitter<W> {
	output: W,
	lines:  usize,
}

impl<W: Write> Emitter<W> {
	pub fn new(output: W) -> Self { Self { output, lines: 0 } }

	/// Emit one tab-indented instruction line.
	pub fn emit(&mut self, instruction: Instruction) -> std::io::Result<()> {
		writeln!(self.output, "\t{instruction}")?;
		self.lines += 1;
		Ok(())
	}

	/// Emit a label definition at the left margin.
	pub fn post_label(&mut self, label: Label) -> std::io::Result<()> {
		writeln!(self.output, "{label}:")?;
		self.lines += 1;
		Ok(())
	}

	pub fn flush(&mut self) -> std::io::Result<()> { self.output.flush() }

	/// Lines written so far, labels included.
	pub fn lines(&self) -> usize { self.lines }

	pub fn into_inner(self) -> W { self.output }
}
