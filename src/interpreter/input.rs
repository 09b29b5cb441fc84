use std::io::{self, BufRead};

use crate::error::{CradleError, runtime::RuntimeError};

/// Where `?name` statements take their values from.
pub trait ValueInput {
	fn read_value(&mut self, name: char) -> Result<i64, CradleError>;
}

/// One integer per line from any buffered reader.
pub struct LineInput<R>(R);

impl<R: BufRead> LineInput<R> {
	pub fn new(reader: R) -> Self { Self(reader) }
}

impl<R: BufRead> ValueInput for LineInput<R> {
	fn read_value(&mut self, name: char) -> Result<i64, CradleError> {
		let mut line = String::new();
		let read = self.0.read_line(&mut line)?;
		parse_value(name, read, &line)
	}
}

/// Reads through the shared stdin handle one line at a time. The program
/// must not be read from stdin concurrently; see `Cradle::run_shared`.
impl ValueInput for io::Stdin {
	fn read_value(&mut self, name: char) -> Result<i64, CradleError> {
		let mut line = String::new();
		let read = self.read_line(&mut line)?;
		parse_value(name, read, &line)
	}
}

fn parse_value(name: char, read: usize, line: &str) -> Result<i64, CradleError> {
	if read == 0 {
		return Err(RuntimeError::InputExhausted(name).into());
	}
	let text = line.trim();
	text.parse::<i64>().map_err(|_| RuntimeError::InvalidInput { name, text: text.to_string() }.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_one_value_per_line() {
		let mut input = LineInput::new("12\n  -3 \r\n".as_bytes());
		assert_eq!(input.read_value('A').unwrap(), 12);
		assert_eq!(input.read_value('B').unwrap(), -3);
		assert!(matches!(input.read_value('C'), Err(CradleError::Runtime(RuntimeError::InputExhausted('C')))));
	}

	#[test]
	fn rejects_non_integers() {
		let mut input = LineInput::new("twelve\n".as_bytes());
		assert!(matches!(
			input.read_value('X'),
			Err(CradleError::Runtime(RuntimeError::InvalidInput { name: 'X', ref text })) if text == "twelve"
		));
	}
}
