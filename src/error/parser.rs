use crate::error::lexer::LexerError;

/// Errors surfaced while parsing. The parser pulls tokens on demand, so a
/// lexer failure can show up in the middle of a production.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error(transparent)]
	LexerError(#[from] LexerError),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

/// A specific parsing error with line number and type.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ParseError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of parsing error.
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }
}

/// Types of parsing errors.
#[derive(Debug)]
pub enum ParseErrorType {
	/// Error for unexpected tokens.
	UnexpectedToken(String),
	/// Error for a missing colon opening a block.
	ExpectColon,
	/// Error for a missing line break after a statement.
	ExpectNewline,
	/// Error for a block that does not indent after its colon.
	ExpectIndent,
	/// Error for a block that does not close back to the outer level.
	ExpectDedent,
	/// Error for a missing class name in a class definition.
	ExpectClassName,
	/// Error for a missing parent class name in a class definition.
	ExpectSuperclassName,
	/// Error for a missing method name after `def`.
	ExpectMethodName,
	/// Error for a missing parameter name in a method signature.
	ExpectParameterName,
	/// Error for a missing field name after `.`.
	ExpectFieldName,
	/// Error for a missing left parenthesis.
	ExpectLeftParen,
	/// Error for a missing right parenthesis.
	ExpectRightParen,
	/// Error for assigning to something that is not a name path.
	InvalidAssignmentTarget,
	/// Error for instantiating or inheriting from an undeclared class.
	UnknownClass(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken(e) => write!(f, "Unexpected token: {e}"),
			ExpectColon => write!(f, "Expect ':' to open the block."),
			ExpectNewline => write!(f, "Expect line break after statement."),
			ExpectIndent => write!(f, "Expect indented block after ':'."),
			ExpectDedent => write!(f, "Expect block to end before this point."),
			ExpectClassName => write!(f, "Expect class name."),
			ExpectSuperclassName => write!(f, "Expect parent class name."),
			ExpectMethodName => write!(f, "Expect method name after 'def'."),
			ExpectParameterName => write!(f, "Expect parameter name."),
			ExpectFieldName => write!(f, "Expect field name after '.'."),
			ExpectLeftParen => write!(f, "Expect '(' after name."),
			ExpectRightParen => write!(f, "Expect ')' after expression."),
			InvalidAssignmentTarget => write!(f, "Invalid assignment target."),
			UnknownClass(name) => write!(f, "Unknown class '{name}'."),
		}
	}
}
