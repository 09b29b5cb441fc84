//! The closed set of symbols the grammar dispatches on.
//!
//! Every keyword of the block language is a single letter, and `e` doubles as
//! both the end of an `if` and the end of the program. Comparing raw
//! characters everywhere would make that overloading invisible, so the
//! grammar asks the scanner for a `Keyword` or an operator kind instead.

/// An operator class the scanner can recognise and consume.
pub trait Operator: Copy {
	/// Diagnostic name of the class, e.g. `addop`.
	const CLASS: &'static str;

	fn from_symbol(c: char) -> Option<Self>;

	fn symbol(self) -> char;
}

/// Additive operators, the loosest binding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
}

impl Operator for AddOp {
	const CLASS: &'static str = "addop";

	fn from_symbol(c: char) -> Option<Self> {
		match c {
			'+' => Some(AddOp::Plus),
			'-' => Some(AddOp::Minus),
			_ => None,
		}
	}

	fn symbol(self) -> char {
		match self {
			AddOp::Plus => '+',
			AddOp::Minus => '-',
		}
	}
}

/// Multiplicative operators, binding tighter than `AddOp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
}

impl Operator for MulOp {
	const CLASS: &'static str = "mulop";

	fn from_symbol(c: char) -> Option<Self> {
		match c {
			'*' => Some(MulOp::Star),
			'/' => Some(MulOp::Slash),
			_ => None,
		}
	}

	fn symbol(self) -> char {
		match self {
			MulOp::Star => '*',
			MulOp::Slash => '/',
		}
	}
}

/// Block language keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	/// `i`, opens a conditional.
	If,
	/// `l`, starts the alternative branch.
	Else,
	/// `e`, closes a conditional or the whole program.
	End,
}

impl Keyword {
	pub fn from_symbol(c: char) -> Option<Self> {
		match c {
			'i' => Some(Keyword::If),
			'l' => Some(Keyword::Else),
			'e' => Some(Keyword::End),
			_ => None,
		}
	}

	pub fn symbol(self) -> char {
		match self {
			Keyword::If => 'i',
			Keyword::Else => 'l',
			Keyword::End => 'e',
		}
	}

	/// Whether this keyword closes the enclosing block.
	pub fn ends_block(self) -> bool { matches!(self, Keyword::Else | Keyword::End) }
}

/// Interpreter statement leaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
	/// `?name` reads a value into a slot.
	Input,
	/// `!name` prints a slot.
	Output,
	/// `.` ends the program.
	Halt,
}

impl Directive {
	pub fn from_symbol(c: char) -> Option<Self> {
		match c {
			'?' => Some(Directive::Input),
			'!' => Some(Directive::Output),
			'.' => Some(Directive::Halt),
			_ => None,
		}
	}

	pub fn symbol(self) -> char {
		match self {
			Directive::Input => '?',
			Directive::Output => '!',
			Directive::Halt => '.',
		}
	}
}
