/// Whether blanks between tokens are insignificant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
	/// Tokens must be contiguous; a space is just another character.
	Contiguous,
	/// Spaces and tabs after a token are skipped.
	SkipBlanks,
}

/// How many characters one name or number token spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
	/// Exactly one character.
	Single,
	/// The maximal run of acceptable characters.
	Run,
}

/// The lexical rules a scanner applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
	pub spacing: Spacing,
	pub names:   Width,
	pub numbers: Width,
}

impl Dialect {
	/// One character per token, no blanks.
	pub const CHARACTER: Dialect = Dialect { spacing: Spacing::Contiguous, names: Width::Single, numbers: Width::Single };
	/// Multi-digit integers, single letters, no blanks.
	pub const INTERPRETER: Dialect = Dialect { spacing: Spacing::Contiguous, names: Width::Single, numbers: Width::Run };
	/// Identifier and number runs separated by optional blanks.
	pub const TOKEN: Dialect = Dialect { spacing: Spacing::SkipBlanks, names: Width::Run, numbers: Width::Run };

	pub fn with_spacing(self, spacing: Spacing) -> Self { Self { spacing, ..self } }

	/// Widen both names and numbers to runs.
	pub fn widened(self) -> Self { Self { names: Width::Run, numbers: Width::Run, ..self } }
}
