/// A tokenization error with the line it occurred on.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct LexerError {
	line:   usize,
	r#type: LexerErrorType,
}

impl LexerError {
	pub fn new(line: usize, r#type: LexerErrorType) -> Self { Self { line, r#type } }
}

#[derive(Debug)]
pub enum LexerErrorType {
	/// Line indentation is not a whole number of two-space units.
	IndentIncorrect,
	/// A string literal ran into the end of input before its closing quote.
	UnterminatedString,
	/// A character outside the token alphabet.
	UnexpectedCharacter(char),
	/// A numeric literal that does not fit a 64-bit signed integer.
	BadNumberLiteral(String),
}

impl std::fmt::Display for LexerErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexerErrorType::*;
		match self {
			IndentIncorrect => {
				write!(f, "Indent incorrect")
			}
			UnterminatedString => {
				write!(f, "Unterminated string, pair quote not found")
			}
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'")
			}
			BadNumberLiteral(s) => {
				write!(f, "Bad number literal '{s}'")
			}
		}
	}
}
