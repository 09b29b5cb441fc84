//! The target instruction vocabulary.
//!
//! Code generation follows a one-register stack machine: every factor lands
//! in `D0`, a binary operator first pushes the left operand with
//! `MOVE D0,-(SP)`, computes the right operand into `D0`, then combines it
//! with the popped value. `D1` only appears as scratch for division and `A0`
//! only as the store address of an assignment.

use std::fmt::{self, Display};

use super::label::Label;

/// One emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	/// `CLR D0`, seeds a leading unary sign.
	Clear,
	/// `MOVE #n,D0`.
	LoadConstant(String),
	/// `MOVE x(PC),D0`.
	LoadVariable(String),
	/// `BSR x`, a zero-argument call.
	Call(String),
	/// `MOVE D0,-(SP)`.
	Push,
	/// `MOVE (SP)+,D1`.
	PopScratch,
	/// `ADD (SP)+,D0`.
	AddPopped,
	/// `SUB (SP)+,D0`.
	SubtractPopped,
	/// `NEG D0`.
	Negate,
	/// `MULS (SP)+,D0`.
	MultiplyPopped,
	/// `DIVS D1,D0`.
	DivideScratch,
	/// `LEA x(PC),A0`.
	LoadAddress(String),
	/// `MOVE D0,(A0)`.
	Store,
	/// Placeholder for a condition the language cannot express yet.
	Condition,
	/// `BEQ label`.
	BranchIfEqual(Label),
	/// `BRA label`.
	Branch(Label),
	/// A statement the block language does not interpret, copied verbatim.
	Passthrough(String),
	/// `END`.
	End,
}

impl Display for Instruction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Instruction::*;
		match self {
			Clear => write!(f, "CLR D0"),
			LoadConstant(n) => write!(f, "MOVE #{n},D0"),
			LoadVariable(name) => write!(f, "MOVE {name}(PC),D0"),
			Call(name) => write!(f, "BSR {name}"),
			Push => write!(f, "MOVE D0,-(SP)"),
			PopScratch => write!(f, "MOVE (SP)+,D1"),
			AddPopped => write!(f, "ADD (SP)+,D0"),
			SubtractPopped => write!(f, "SUB (SP)+,D0"),
			Negate => write!(f, "NEG D0"),
			MultiplyPopped => write!(f, "MULS (SP)+,D0"),
			DivideScratch => write!(f, "DIVS D1,D0"),
			LoadAddress(name) => write!(f, "LEA {name}(PC),A0"),
			Store => write!(f, "MOVE D0,(A0)"),
			Condition => write!(f, "<condition>"),
			BranchIfEqual(label) => write!(f, "BEQ {label}"),
			Branch(label) => write!(f, "BRA {label}"),
			Passthrough(text) => write!(f, "{text}"),
			End => write!(f, "END"),
		}
	}
}
