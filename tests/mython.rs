//! End-to-end tests driving whole programs through the public facade.

use mython::{Mython, MythonError};

/// Run a program, returning everything it printed.
fn run(source: &str) -> String {
	let mut output = Vec::new();
	Mython.run(source, &mut output).expect("program should run");
	String::from_utf8(output).expect("program output should be UTF-8")
}

fn run_fails(source: &str) -> MythonError {
	let mut output = Vec::new();
	Mython.run(source, &mut output).expect_err("program should fail")
}

#[test]
fn arithmetic_with_precedence() {
	assert_eq!(run("print 1+2*3"), "7\n");
}

#[test]
fn string_concatenation() {
	assert_eq!(run("x = 'hello'\nprint x + ' world'"), "hello world\n");
}

#[test]
fn if_else_branches() {
	assert_eq!(run("if 1 < 2:\n  print 'a'\nelse:\n  print 'b'"), "a\n");
}

#[test]
fn class_with_str_method() {
	assert_eq!(run("class P:\n  def __str__():\n    return 'point'\nprint P()"), "point\n");
}

#[test]
fn inherited_method_override() {
	let source = "\
class Animal:
  def greet():
    return 'generic'
class Dog(Animal):
  def greet():
    return 'woof'
d = Dog()
print d.greet()
";
	assert_eq!(run(source), "woof\n");
}

#[test]
fn division_by_zero_is_reported() {
	let error = run_fails("print 1/0");
	assert!(error.to_string().contains("Division by zero"), "got: {error}");
}

#[test]
fn indentation_errors_carry_their_line() {
	// The bad indent is hit while the parser pulls tokens, so it surfaces
	// through the parser's error type.
	let error = run_fails("x = 1\n y = 2");
	assert!(matches!(error, MythonError::Parser(_)));
	assert!(error.to_string().contains("line 2"), "got: {error}");
	assert!(error.to_string().contains("Indent incorrect"), "got: {error}");
}

#[test]
fn a_bad_first_token_is_a_lexer_error() {
	assert!(matches!(run_fails("@"), MythonError::Lexer(_)));
}

#[test]
fn parse_errors_carry_their_line() {
	let error = run_fails("x = 1\nif x\n  print x");
	assert!(matches!(error, MythonError::Parser(_)));
	assert!(error.to_string().contains("line 2"), "got: {error}");
}

#[test]
fn a_small_program_with_state() {
	let source = "\
class Stack:
  def __init__():
    self.count = 0
  def push(value):
    if self.count == 0:
      self.first = value
    if self.count == 1:
      self.second = value
    self.count = self.count + 1
  def total():
    return self.first + self.second
s = Stack()
s.push(40)
s.push(2)
print s.count, s.total()
";
	assert_eq!(run(source), "2 42\n");
}

#[test]
fn run_file_executes_the_sample_program() {
	let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.my");
	assert!(Mython.run_file(&path).is_ok());
}

#[test]
fn run_file_reports_a_missing_file() {
	let path = std::path::Path::new("no/such/file.my");
	assert!(matches!(Mython.run_file(path), Err(MythonError::InternalError(_))));
}
