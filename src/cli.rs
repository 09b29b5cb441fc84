use std::path::{Path, PathBuf};

use palc::{Parser, Subcommand};

use crate::{Program, Settings};

#[derive(Parser)]
#[command(name = "zcradle", after_long_help = "Reads the source from PATH, or stdin when PATH is omitted.")]
pub struct Cli {
	/// Log filter for diagnostics on stderr, e.g. `debug` or `zcradle=trace`
	#[arg(long)]
	pub log_level: Option<String>,
	#[command(subcommand)]
	pub mode:      Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Compile a single expression
	Expression {
		path:        Option<PathBuf>,
		/// Skip spaces and tabs between tokens
		#[arg(long)]
		skip_blanks: bool,
		/// Read multi-character names and numbers
		#[arg(long)]
		wide:        bool,
	},
	/// Compile a single assignment
	Assignment {
		path:        Option<PathBuf>,
		/// Skip spaces and tabs between tokens
		#[arg(long)]
		skip_blanks: bool,
		/// Read multi-character names and numbers
		#[arg(long)]
		wide:        bool,
	},
	/// Compile a block-structured program ending with `e`. Keywords are
	/// single letters, so names stay one letter wide.
	Block {
		path:        Option<PathBuf>,
		/// Skip spaces and tabs between tokens
		#[arg(long)]
		skip_blanks: bool,
	},
	/// Interpret a program ending with `.`
	Interpret {
		path:        Option<PathBuf>,
		/// Skip spaces and tabs inside statements
		#[arg(long)]
		skip_blanks: bool,
	},
	/// Interpret statements line by line
	Repl {
		/// Skip spaces and tabs inside statements
		#[arg(long)]
		skip_blanks: bool,
	},
}

impl Mode {
	/// The library settings this mode asks for.
	pub fn settings(&self) -> Settings {
		let (program, skip_blanks, wide) = match *self {
			Mode::Expression { skip_blanks, wide, .. } => (Program::Expression, skip_blanks, wide),
			Mode::Assignment { skip_blanks, wide, .. } => (Program::Assignment, skip_blanks, wide),
			Mode::Block { skip_blanks, .. } => (Program::Block, skip_blanks, false),
			Mode::Interpret { skip_blanks, .. } | Mode::Repl { skip_blanks } => (Program::Interpret, skip_blanks, false),
		};
		let mut settings = Settings::new(program);
		if skip_blanks {
			settings = settings.skip_blanks();
		}
		if wide {
			settings = settings.widened();
		}
		settings
	}

	/// The source file, if one was given.
	pub fn path(&self) -> Option<&Path> {
		match self {
			Mode::Expression { path, .. }
			| Mode::Assignment { path, .. }
			| Mode::Block { path, .. }
			| Mode::Interpret { path, .. } => path.as_deref(),
			Mode::Repl { .. } => None,
		}
	}
}
