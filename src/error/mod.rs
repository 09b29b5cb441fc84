pub mod runtime;
pub mod syntax;

use std::{io, path::PathBuf};

use self::{runtime::RuntimeError, syntax::{SyntaxError, SyntaxErrorKind}};

/// CradleError is the top-level error type for every translation mode.
#[derive(thiserror::Error, Debug)]
pub enum CradleError {
	/// Internal translator error, should never happen
	#[error("CompilerInternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// The source file could not be opened
	#[error("Failed open source file {}: {source}", .path.display())]
	Source { path: PathBuf, source: io::Error },
	/// The source violated the grammar
	#[error("{0}")]
	Syntax(#[from] SyntaxError),
	/// Evaluation failed in the interpreter
	#[error("Runtime error: {0}")]
	Runtime(#[from] RuntimeError),
	/// Reading the source or writing the output failed
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl CradleError {
	/// The grammar violation behind this error, if it is one.
	pub fn syntax_kind(&self) -> Option<&SyntaxErrorKind> {
		match self {
			CradleError::Syntax(error) => Some(error.kind()),
			_ => None,
		}
	}
}
