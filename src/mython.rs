use std::{fs::read_to_string, io::{self, Read, Write}, path::Path};

use anyhow::Context;

use crate::{interpreter::{Interpreter, object::Closure}, lexer::Lexer, parser::Parser};

/// The interpreter front end: feeds source text through the lexer, parser
/// and evaluator.
pub struct Mython;

impl Mython {
	/// Run a program from a source file, printing to standard output.
	pub fn run_file(&self, path: &Path) -> crate::Result<()> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source, &mut io::stdout().lock())
	}

	/// Read a whole program from standard input and run it.
	pub fn run_stdin(&self) -> crate::Result<()> {
		let mut source = String::new();
		io::stdin().read_to_string(&mut source).context("Failed read standard input")?;
		self.run(&source, &mut io::stdout().lock())
	}

	/// Run `source`, sending everything the program prints to `output`.
	pub fn run<W: Write>(&self, source: &str, output: &mut W) -> crate::Result<()> {
		let lexer = Lexer::new(source)?;
		let program = Parser::new(lexer).parse()?;
		let mut globals = Closure::new();
		Interpreter::new(output).execute(&program, &mut globals)?;
		Ok(())
	}
}
