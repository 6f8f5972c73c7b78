use mython::cli::*;
use palc::Parser;

fn main() {
	let mython = mython::Mython;

	let result = match Cli::parse().mode.unwrap_or(Mode::Stdin) {
		Mode::File { path } => mython.run_file(&path),
		Mode::Stdin => mython.run_stdin(),
	};
	if let Err(e) = result {
		eprintln!("{e}");
		std::process::exit(1);
	}
}
