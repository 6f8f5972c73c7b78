//! # Mython
//!
//! A tree-walking interpreter for Mython, a small dynamically-typed language
//! with indentation-delimited blocks, 64-bit integers, strings, booleans, a
//! `None` value, and classes with single inheritance:
//!
//! ``` text
//! class Rect:
//!   def __init__(w, h):
//!     self.w = w
//!     self.h = h
//!   def area():
//!     return self.w * self.h
//!
//! r = Rect(2, 3)
//! print 'area =', r.area()
//! ```
//!
//! ## Pipeline
//!
//! Source text runs through three stages, each a module of this crate:
//!
//! 1. [`lexer`](crate::lexer): characters to tokens. Block structure is
//!    measured here: two leading spaces per level, turned into synthetic
//!    `Indent`/`Dedent` tokens, with `Newline` closing each statement.
//! 2. [`parser`](crate::parser): tokens to an AST of
//!    [`Statement`](crate::statement::Statement) nodes. Classes are compiled
//!    to their runtime form during this pass.
//! 3. [`interpreter`](crate::interpreter): walks the AST against a scope
//!    and an output stream. Values are reference-counted
//!    [`Object`](crate::interpreter::object::Object) handles, so instances
//!    alias freely between `self` and their callers.
//!
//! The [`Mython`] facade wires the stages together; the binary in `main.rs`
//! maps any error to a non-zero exit code.

pub mod cli;
pub mod error;
pub mod interpreter;
pub mod lexer;
mod mython;
pub mod parser;
pub mod statement;
pub mod utils;

pub use error::{MythonError, interpreter::InterpreterError, lexer::{LexerError, LexerErrorType}, parser::{ParseError, ParseErrorType, ParserError}};
pub use mython::Mython;

pub type Result<T> = std::result::Result<T, MythonError>;
