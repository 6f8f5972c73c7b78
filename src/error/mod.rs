pub mod interpreter;
pub mod lexer;
pub mod parser;

/// MythonError is the top-level error type for the Mython interpreter.
#[derive(thiserror::Error, Debug)]
pub enum MythonError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	Lexer(#[from] lexer::LexerError),
	#[error(transparent)]
	Parser(#[from] parser::ParserError),
	#[error(transparent)]
	Interpreter(#[from] interpreter::InterpreterError),
}
