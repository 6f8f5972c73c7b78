use std::path::PathBuf;

use palc::{Parser, Subcommand};

/// CLI arguments
#[derive(Parser)]
#[command(name = "mython", after_long_help = "A tree-walking interpreter for the Mython language.")]
pub struct Cli {
	/// Program mode; reads from standard input when omitted
	#[command(subcommand)]
	pub mode: Option<Mode>,
}

/// Program mode
#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a program from a source file
	File { path: PathBuf },
	/// Read the program from standard input
	Stdin,
}
