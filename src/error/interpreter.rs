use std::io;

use crate::interpreter::object::Object;

/// Errors that can occur while executing a program.
#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
	/// Error for reading a name that is bound nowhere in the current scope.
	#[error("Variable '{0}' not found")]
	UndefinedVariable(String),
	/// Error for a field access or method call on a non-instance value.
	#[error("'{0}' is accessed on a value that is not a class instance")]
	NotAnInstance(String),
	/// Error for a method missing by name or by argument count.
	#[error("Class {class} has no method '{method}' taking {args} arguments")]
	UnknownMethod {
		class:  String,
		method: String,
		args:   usize,
	},
	/// Error for an arithmetic operator applied to unsupported operand kinds.
	#[error("unsupported operand types for '{0}'")]
	UnsupportedOperands(&'static str),
	#[error("Division by zero")]
	DivisionByZero,
	/// Error for comparing values of kinds with no common order.
	#[error("different types compared")]
	IncomparableTypes,
	/// Error for `__eq__`/`__lt__` returning something other than a Bool.
	#[error("comparison method did not return a Bool")]
	NonBoolComparison,
	/// Non-local exit carrying a method result. Unwound until the enclosing
	/// method body catches it; reaching the top level it reports as below.
	#[error("'return' outside of a method body")]
	Return(Object),
	#[error("failed writing program output: {0}")]
	Io(#[from] io::Error),
}
