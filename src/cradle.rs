use std::{
	fs::File,
	io::{self, BufRead, BufReader, Read, Write},
	path::Path,
};

use anyhow::Context;
use tracing::{debug, info};

use crate::{
	CradleError,
	compiler::Compiler,
	interpreter::{Flow, Interpreter, LineInput, ValueInput},
	scanner::{Dialect, Directive, Spacing},
};

/// The top-level rule a run starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
	/// One expression followed by a line break.
	Expression,
	/// One assignment followed by a line break.
	Assignment,
	/// Statements and conditionals closed by `e`.
	Block,
	/// Interpreter statements closed by `.`.
	Interpret,
}

impl Program {
	/// The dialect each program is written in unless told otherwise.
	pub fn dialect(self) -> Dialect {
		match self {
			Program::Expression | Program::Block => Dialect::CHARACTER,
			Program::Assignment => Dialect::TOKEN,
			Program::Interpret => Dialect::INTERPRETER,
		}
	}
}

/// What to run and with which lexical rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	pub program: Program,
	pub dialect: Dialect,
}

impl Settings {
	pub fn new(program: Program) -> Self { Self { program, dialect: program.dialect() } }

	pub fn skip_blanks(mut self) -> Self {
		self.dialect = self.dialect.with_spacing(Spacing::SkipBlanks);
		self
	}

	/// Read names and numbers as whole runs. The interpreter keeps its
	/// single-letter names regardless.
	pub fn widened(mut self) -> Self {
		self.dialect = self.dialect.widened();
		self
	}
}

/// Cradle is the entry point tying a source, a program and an output together.
pub struct Cradle {
	settings: Settings,
}

impl Cradle {
	pub fn new(settings: Settings) -> Self { Self { settings } }

	/// Translate a source file to stdout.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CradleError> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| CradleError::Source { path: path.to_path_buf(), source })?;
		info!(path = %path.display(), program = ?self.settings.program, "translating file");
		self.run(BufReader::new(file), io::stdout().lock())
	}

	/// Translate stdin to stdout.
	pub fn run_stdin(&self) -> Result<(), CradleError> {
		info!(program = ?self.settings.program, "translating stdin");
		self.run_shared(io::stdin().lock(), io::stdout().lock())
	}

	/// Translate a reader that carries the program followed by its input
	/// values. An interpreted program runs up to its `.`; the rest of that
	/// line is dropped and `?` statements read the lines after it.
	pub fn run_shared<R: BufRead, W: Write>(&self, mut source: R, output: W) -> Result<(), CradleError> {
		if self.settings.program != Program::Interpret {
			return self.run_with_input(source, output, LineInput::new(io::empty()));
		}
		let halt = Directive::Halt.symbol() as u8;
		let mut program = Vec::new();
		source.read_until(halt, &mut program)?;
		if program.last() == Some(&halt) {
			source.read_line(&mut String::new())?;
		}
		debug!(bytes = program.len(), "split program from its input");
		self.run_with_input(program.as_slice(), output, LineInput::new(source))
	}

	/// Translate `source` into `output`; interpreter input comes from stdin.
	pub fn run<R: Read, W: Write>(&self, source: R, output: W) -> Result<(), CradleError> {
		self.run_with_input(source, output, io::stdin())
	}

	/// Translate `source` into `output`. Whatever was written before a
	/// failure stays in `output`.
	pub fn run_with_input<R: Read, W: Write, I: ValueInput>(
		&self,
		source: R,
		output: W,
		input: I,
	) -> Result<(), CradleError> {
		let Settings { program, dialect } = self.settings;
		debug!(?program, ?dialect, "starting run");
		let compile: fn(&mut Compiler<R, W>) -> Result<(), CradleError> = match program {
			Program::Interpret => {
				return Interpreter::new(output, input).with_spacing(dialect.spacing).run(source);
			}
			Program::Expression => Compiler::expression_program,
			Program::Assignment => Compiler::assignment_program,
			Program::Block => Compiler::block_program,
		};

		let mut compiler = Compiler::new(source, output, dialect)?;
		let result = compile(&mut compiler);
		compiler.flush()?;
		result
	}

	/// Translate a string, collecting the output. Interpreter input
	/// statements see an empty input.
	pub fn translate(&self, source: &str) -> Result<String, CradleError> {
		let mut output = Vec::new();
		self.run_with_input(source.as_bytes(), &mut output, LineInput::new(io::empty()))?;
		Ok(String::from_utf8(output).context("Output is not UTF-8")?)
	}

	/// Run the interactive interpreter; the symbol table lives for the whole
	/// session and `.` ends it.
	pub fn run_prompt(&self) {
		let mut interpreter = Interpreter::new(io::stdout(), io::stdin()).with_spacing(self.settings.dialect.spacing);
		let mut input = String::new();
		let stdin = io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited zcradle repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			match interpreter.run_partial(input.as_bytes()) {
				Ok(Flow::Halted) => break,
				Ok(Flow::Exhausted) => {}
				Err(e) => eprintln!("error: {e}"),
			}
		}
	}
}
