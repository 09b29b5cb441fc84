/// Errors that can occur while the interpreter evaluates statements
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
	/// The right operand of `/` evaluated to zero
	#[error("division by zero")]
	DivisionByZero,
	/// An arithmetic result does not fit in an `i64`
	#[error("arithmetic overflow in `{0}`")]
	Overflow(char),
	/// An input statement found no more values
	#[error("no input left for `?{0}`")]
	InputExhausted(char),
	/// An input statement read something that is not an integer
	#[error("invalid input for `?{name}`: {text:?}")]
	InvalidInput { name: char, text: String },
}
