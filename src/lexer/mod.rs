//! Indentation-aware lexer for Mython source text.
//!
//! Block structure is not written with braces but with leading whitespace:
//! one nesting level is exactly two spaces, and the lexer turns changes of
//! depth into synthetic `Indent`/`Dedent` tokens so the parser can treat
//! blocks like any other delimiter. A line break inside a statement becomes
//! a `Newline` token; blank lines and `#` comments produce nothing.
//!
//! Tokens are handed out one at a time: `current()` is the lookahead the
//! parser inspects, `next_token()` advances. A multi-level dedent is spread
//! over successive calls by putting the consumed indentation characters back
//! into the stream, so every call observes one level of change at most.
mod token;

use std::str::Chars;

pub use token::Token;

use crate::error::lexer::{LexerError, LexerErrorType};

/// A lexer for Mython source code.
pub struct Lexer<'a> {
	/// Remaining source characters.
	source:     Chars<'a>,
	/// Characters put back into the stream, consumed before `source`.
	pending:    Vec<char>,
	/// Current block nesting depth in two-space units.
	indent:     usize,
	/// Whether the reader sits at the start of a physical line.
	new_line:   bool,
	/// Line the lexer is currently reading, for diagnostics.
	line:       usize,
	/// Line on which the current token started.
	token_line: usize,
	/// The token `current()` hands out.
	current:    Token,
}

impl<'a> Lexer<'a> {
	/// Create a lexer over `source` with the first token already read.
	pub fn new(source: &'a str) -> Result<Self, LexerError> {
		let mut lexer = Self {
			source:     source.chars(),
			pending:    Vec::new(),
			indent:     0,
			new_line:   true,
			line:       1,
			token_line: 1,
			current:    Token::Eof,
		};
		lexer.current = lexer.read_token()?;
		Ok(lexer)
	}

	/// The token most recently read.
	pub fn current(&self) -> &Token { &self.current }

	/// Advance to the next token and return it.
	pub fn next_token(&mut self) -> Result<&Token, LexerError> {
		self.current = self.read_token()?;
		Ok(&self.current)
	}

	/// Line on which the current token started, 1-based.
	pub fn line(&self) -> usize { self.token_line }

	fn get(&mut self) -> Option<char> { self.pending.pop().or_else(|| self.source.next()) }

	fn putback(&mut self, c: char) { self.pending.push(c) }

	fn error(&self, r#type: LexerErrorType) -> LexerError { LexerError::new(self.line, r#type) }

	fn read_token(&mut self) -> Result<Token, LexerError> {
		loop {
			self.token_line = self.line;

			// Inside a block every line starts by matching the current
			// indentation; coming up short means the block is closing.
			if self.new_line && self.indent > 0 {
				let skipped = self.skip_current_indent()?;
				if skipped < self.indent {
					self.indent -= 1;
					// Restore the matched pairs so the next call re-measures
					// the same line and can emit further dedents.
					for _ in 0..skipped {
						self.putback(' ');
						self.putback(' ');
					}
					return Ok(Token::Dedent);
				}
			}

			let Some(c) = self.get() else {
				if !self.new_line {
					self.new_line = true;
					return Ok(Token::Newline);
				}
				return Ok(Token::Eof);
			};

			match c {
				'\n' => {
					self.line += 1;
					if !self.new_line {
						self.new_line = true;
						return Ok(Token::Newline);
					}
					// Blank line: no token, indentation unchanged.
				}
				' ' if self.new_line => {
					// The line goes one level deeper than the matched indent.
					if self.get() != Some(' ') {
						return Err(self.error(LexerErrorType::IndentIncorrect));
					}
					self.indent += 1;
					self.new_line = false;
					return Ok(Token::Indent);
				}
				' ' => {}
				'#' => {
					while let Some(c) = self.get() {
						if c == '\n' {
							self.putback('\n');
							break;
						}
					}
				}
				'0'..='9' => {
					self.new_line = false;
					return self.read_number(c);
				}
				'=' | '!' | '<' | '>' => {
					if let Some(next) = self.get() {
						if next == '=' {
							self.new_line = false;
							return Ok(match c {
								'=' => Token::Eq,
								'!' => Token::NotEq,
								'<' => Token::LessOrEq,
								_ => Token::GreaterOrEq,
							});
						}
						self.putback(next);
					}
					if c == '!' {
						return Err(self.error(LexerErrorType::UnexpectedCharacter('!')));
					}
					self.new_line = false;
					return Ok(Token::Char(c));
				}
				'+' | '-' | '*' | '/' | '.' | ',' | '(' | ')' | ':' => {
					self.new_line = false;
					return Ok(Token::Char(c));
				}
				'\'' | '"' => {
					self.new_line = false;
					return self.read_string(c);
				}
				c if c.is_ascii_alphabetic() || c == '_' => {
					self.new_line = false;
					return Ok(self.read_id(c));
				}
				_ => return Err(self.error(LexerErrorType::UnexpectedCharacter(c))),
			}
		}
	}

	/// Consume leading two-space pairs up to the current indentation depth.
	/// Returns how many pairs matched; fewer than `self.indent` means the
	/// line dedents. The first unmatched characters are put back.
	fn skip_current_indent(&mut self) -> Result<usize, LexerError> {
		let mut skipped = 0;
		while skipped < self.indent {
			let Some(c) = self.get() else {
				return Ok(skipped);
			};
			if c == '\n' {
				// Blank line: start measuring the next one from scratch.
				self.line += 1;
				skipped = 0;
				continue;
			}
			let next = self.get();
			if c == ' ' && next != Some(' ') {
				return Err(self.error(LexerErrorType::IndentIncorrect));
			}
			if c != ' ' {
				if let Some(next) = next {
					self.putback(next);
				}
				self.putback(c);
				return Ok(skipped);
			}
			skipped += 1;
		}
		Ok(skipped)
	}

	fn read_number(&mut self, first: char) -> Result<Token, LexerError> {
		let mut literal = String::from(first);
		while let Some(c) = self.get() {
			if !c.is_ascii_digit() {
				self.putback(c);
				break;
			}
			literal.push(c);
		}
		match literal.parse() {
			Ok(value) => Ok(Token::Number(value)),
			Err(_) => Err(self.error(LexerErrorType::BadNumberLiteral(literal))),
		}
	}

	/// Read a string literal delimited by `quote` (either `'` or `"`).
	/// `\t` and `\n` escape to tab and line break; `\` before any other
	/// character yields that character. An empty literal is the `None`
	/// token, not an empty string.
	fn read_string(&mut self, quote: char) -> Result<Token, LexerError> {
		let mut value = String::new();
		loop {
			let Some(c) = self.get() else {
				return Err(self.error(LexerErrorType::UnterminatedString));
			};
			if c == quote {
				break;
			}
			match c {
				'\\' => match self.get() {
					Some('t') => value.push('\t'),
					Some('n') => value.push('\n'),
					Some(other) => value.push(other),
					None => return Err(self.error(LexerErrorType::UnterminatedString)),
				},
				'\n' => {
					self.line += 1;
					value.push(c);
				}
				_ => value.push(c),
			}
		}
		if value.is_empty() { Ok(Token::None) } else { Ok(Token::String(value)) }
	}

	fn read_id(&mut self, first: char) -> Token {
		let mut text = String::from(first);
		while let Some(c) = self.get() {
			if !(c.is_ascii_alphanumeric() || c == '_') {
				self.putback(c);
				break;
			}
			text.push(c);
		}
		Token::keyword_or_id(&text)
	}
}
