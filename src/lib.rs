//! # Translating while parsing
//!
//! Source: `a=2+3*4`
//!
//! A conventional compiler scans the text into tokens, parses the tokens into
//! a tree, and walks the tree to produce code. This crate does none of that.
//! It keeps one character of lookahead and a handful of mutually recursive
//! functions, one per grammar rule, and each rule writes its instructions the
//! moment it has recognised its input.

//! ## Precedence by recursion
//!
//! ``` BNF
//! expression → ( "+" | "-" )? term ( ( "+" | "-" ) term )* ;
//! term       → factor ( ( "*" | "/" ) factor )* ;
//! factor     → "(" expression ")" | NAME ( "(" ")" )? | NUMBER ;
//! ```
//!
//! `expression` cannot finish a `+` before `term` has finished the `*`
//! underneath it, so the multiplication's code lands in the output first.
//! That ordering is the whole of operator precedence here.
//!
//! ``` text
//!     MOVE #2,D0
//!     MOVE D0,-(SP)
//!     MOVE #3,D0
//!     MOVE D0,-(SP)
//!     MOVE #4,D0
//!     MULS (SP)+,D0
//!     ADD (SP)+,D0
//!     LEA a(PC),A0
//!     MOVE D0,(A0)
//! ```

//! ## Control flow
//!
//! Block programs add `i`(if), `l`(else) and `e`(end). A conditional branches
//! over its body to a fresh label, and an else branch needs a second label to
//! jump past the alternative. Labels come from a counter owned by the
//! compiler, so every run numbers them the same way.

//! ## Evaluation
//!
//! The interpreter walks the very same expression grammar but returns values
//! instead of writing instructions, storing them in 26 single-letter slots.
//! `a=3 b=4 !a !b .` prints `3` and `4`.

pub mod cli;
pub mod compiler;
mod cradle;
pub mod error;
pub mod interpreter;
pub mod scanner;

pub use cradle::{Cradle, Program, Settings};
pub use error::{
	CradleError,
	runtime::RuntimeError,
	syntax::{SyntaxError, SyntaxErrorKind},
};
