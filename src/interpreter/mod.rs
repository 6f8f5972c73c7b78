//! Tree-walking evaluator for Mython programs.
//!
//! Every AST node executes against a closure (the current scope frame) and
//! yields an `Object`. The top-level program runs in one global closure;
//! each method invocation gets a fresh closure holding `self` plus the
//! formal parameters, and nothing else; scopes do not nest.
//!
//! `return` travels as the `Err(InterpreterError::Return(..))` signal so it
//! can unwind through nested compounds without cooperation from every node;
//! the `MethodBody` wrapper around each method catches it and turns it back
//! into the call's result. A `return` that reaches the top level surfaces as
//! a plain error, since there is no frame to leave.

pub mod class;
pub mod instance;
pub mod object;

use std::io::Write;

use crate::{error::interpreter::InterpreterError, interpreter::{class::Method, instance::InstanceValue, object::{Closure, Object}}, statement::{ArithmeticOp, Comparator, LogicalOp, Statement}, utils::RcCell};

const INIT_METHOD: &str = "__init__";
const STR_METHOD: &str = "__str__";
const EQ_METHOD: &str = "__eq__";
const LT_METHOD: &str = "__lt__";
const ADD_METHOD: &str = "__add__";
const SELF_VAR: &str = "self";

/// Interpreter that executes Mython AST nodes.
pub struct Interpreter<'a, W: Write> {
	/// Where `print` output goes.
	output: &'a mut W,
}

impl<'a, W: Write> Interpreter<'a, W> {
	pub fn new(output: &'a mut W) -> Self { Self { output } }

	/// Execute one node against `closure` and return its value. Statements
	/// with no meaningful value yield `None`.
	pub fn execute(&mut self, statement: &Statement, closure: &mut Closure) -> Result<Object, InterpreterError> {
		match statement {
			Statement::Constant(object) => Ok(object.clone()),
			Statement::Compound(statements) => {
				for statement in statements {
					self.execute(statement, closure)?;
				}
				Ok(Object::None)
			}
			Statement::Assignment { var, value } => {
				let value = self.execute(value, closure)?;
				closure.insert(var.clone(), value.clone());
				Ok(value)
			}
			Statement::VariableValue { var, fields } => {
				let mut object = closure
					.get(var)
					.cloned()
					.ok_or_else(|| InterpreterError::UndefinedVariable(var.clone()))?;
				for field in fields {
					let Object::Instance(instance) = object else {
						return Err(InterpreterError::NotAnInstance(field.clone()));
					};
					object = instance.borrow().field(field);
				}
				Ok(object)
			}
			Statement::FieldAssignment { object, field, value } => {
				let object = self.execute(object, closure)?;
				let Object::Instance(instance) = object else {
					return Err(InterpreterError::NotAnInstance(field.clone()));
				};
				let value = self.execute(value, closure)?;
				instance.borrow_mut().set_field(field, value.clone());
				Ok(value)
			}
			Statement::Print(args) => {
				let mut first = true;
				for arg in args {
					let value = self.execute(arg, closure)?;
					if first {
						first = false;
					} else {
						write!(self.output, " ")?;
					}
					let text = self.stringify(&value)?;
					write!(self.output, "{text}")?;
				}
				writeln!(self.output)?;
				Ok(Object::None)
			}
			Statement::MethodCall { object, method, args } => {
				let object = self.execute(object, closure)?;
				let Object::Instance(instance) = object else {
					return Err(InterpreterError::NotAnInstance(method.clone()));
				};
				// Resolve before evaluating arguments: a bad call must not
				// run its argument expressions.
				if !instance.borrow().has_method(method, args.len()) {
					return Err(self.unknown_method(&instance, method, args.len()));
				}
				let args = self.evaluate_args(args, closure)?;
				self.call(&instance, method, args)
			}
			Statement::NewInstance { class, args } => {
				let instance = RcCell::new(InstanceValue::new(class.clone()));
				// A missing or arity-mismatched __init__ skips construction
				// silently, arguments unevaluated.
				if instance.borrow().has_method(INIT_METHOD, args.len()) {
					let args = self.evaluate_args(args, closure)?;
					self.call(&instance, INIT_METHOD, args)?;
				}
				Ok(Object::Instance(instance))
			}
			Statement::Stringify(argument) => {
				let value = self.execute(argument, closure)?;
				Ok(Object::String(self.stringify(&value)?))
			}
			Statement::Arithmetic { op, lhs, rhs } => {
				let lhs = self.execute(lhs, closure)?;
				let rhs = self.execute(rhs, closure)?;
				self.arithmetic(*op, lhs, rhs)
			}
			Statement::Logical { op, lhs, rhs } => {
				// Both operands always run; `1 or probe()` still calls probe.
				let lhs = self.execute(lhs, closure)?;
				let rhs = self.execute(rhs, closure)?;
				let value = match op {
					LogicalOp::And => lhs.is_true() && rhs.is_true(),
					LogicalOp::Or => lhs.is_true() || rhs.is_true(),
				};
				Ok(Object::Bool(value))
			}
			Statement::Not(argument) => {
				let value = self.execute(argument, closure)?;
				Ok(Object::Bool(!value.is_true()))
			}
			Statement::Comparison { cmp, lhs, rhs } => {
				let lhs = self.execute(lhs, closure)?;
				let rhs = self.execute(rhs, closure)?;
				let value = self.compare(*cmp, &lhs, &rhs)?;
				Ok(Object::Bool(value))
			}
			Statement::IfElse { condition, if_body, else_body } => {
				if self.execute(condition, closure)?.is_true() {
					self.execute(if_body, closure)
				} else if let Some(else_body) = else_body {
					self.execute(else_body, closure)
				} else {
					Ok(Object::None)
				}
			}
			Statement::Return(statement) => Err(InterpreterError::Return(self.execute(statement, closure)?)),
			Statement::MethodBody(body) => match self.execute(body, closure) {
				Err(InterpreterError::Return(value)) => Ok(value),
				Err(e) => Err(e),
				Ok(_) => Ok(Object::None),
			},
			Statement::ClassDefinition(class) => {
				closure.insert(class.name().to_string(), Object::Class(class.clone()));
				Ok(Object::None)
			}
		}
	}

	/// Invoke `method` on `instance` with already-evaluated arguments, in a
	/// fresh closure binding `self` and the formal parameters.
	pub fn call(
		&mut self,
		instance: &RcCell<InstanceValue>,
		method: &str,
		args: Vec<Object>,
	) -> Result<Object, InterpreterError> {
		let class = instance.borrow().class().clone();
		let Some(resolved) = class.method(method).filter(|m| m.formal_params.len() == args.len()) else {
			return Err(self.unknown_method(instance, method, args.len()));
		};
		let mut closure = method_closure(resolved, instance, args);
		self.execute(&resolved.body, &mut closure)
	}

	fn evaluate_args(&mut self, args: &[Statement], closure: &mut Closure) -> Result<Vec<Object>, InterpreterError> {
		args.iter().map(|arg| self.execute(arg, closure)).collect()
	}

	fn unknown_method(&self, instance: &RcCell<InstanceValue>, method: &str, args: usize) -> InterpreterError {
		InterpreterError::UnknownMethod {
			class:  instance.borrow().class().name().to_string(),
			method: method.to_string(),
			args,
		}
	}

	fn arithmetic(&mut self, op: ArithmeticOp, lhs: Object, rhs: Object) -> Result<Object, InterpreterError> {
		use ArithmeticOp::*;
		match (op, &lhs, &rhs) {
			(Add, Object::String(l), Object::String(r)) => Ok(Object::String(format!("{l}{r}"))),
			(Add, Object::Instance(instance), _) => {
				let instance = instance.clone();
				self.call(&instance, ADD_METHOD, vec![rhs])
			}
			(Add, Object::Number(l), Object::Number(r)) => Ok(Object::Number(l.wrapping_add(*r))),
			(Sub, Object::Number(l), Object::Number(r)) => Ok(Object::Number(l.wrapping_sub(*r))),
			(Mult, Object::Number(l), Object::Number(r)) => Ok(Object::Number(l.wrapping_mul(*r))),
			(Div, Object::Number(_), Object::Number(0)) => Err(InterpreterError::DivisionByZero),
			(Div, Object::Number(l), Object::Number(r)) => Ok(Object::Number(l.wrapping_div(*r))),
			(Add, ..) => Err(InterpreterError::UnsupportedOperands("+")),
			(Sub, ..) => Err(InterpreterError::UnsupportedOperands("-")),
			(Mult, ..) => Err(InterpreterError::UnsupportedOperands("*")),
			(Div, ..) => Err(InterpreterError::UnsupportedOperands("/")),
		}
	}

	/// The four derived comparators are composed from `equal` and `less`
	/// exactly as written: with instance operands that composition is
	/// observable through repeated `__eq__`/`__lt__` dispatch.
	fn compare(&mut self, cmp: Comparator, lhs: &Object, rhs: &Object) -> Result<bool, InterpreterError> {
		match cmp {
			Comparator::Equal => self.equal(lhs, rhs),
			Comparator::NotEqual => Ok(!self.equal(lhs, rhs)?),
			Comparator::Less => self.less(lhs, rhs),
			Comparator::Greater => Ok(!(self.less(lhs, rhs)? || self.equal(lhs, rhs)?)),
			Comparator::LessOrEqual => Ok(self.less(lhs, rhs)? || self.equal(lhs, rhs)?),
			Comparator::GreaterOrEqual => Ok(!self.less(lhs, rhs)?),
		}
	}

	fn equal(&mut self, lhs: &Object, rhs: &Object) -> Result<bool, InterpreterError> {
		match (lhs, rhs) {
			(Object::Bool(l), Object::Bool(r)) => Ok(l == r),
			(Object::String(l), Object::String(r)) => Ok(l == r),
			(Object::Number(l), Object::Number(r)) => Ok(l == r),
			(Object::Instance(l), Object::Instance(_)) => {
				let l = l.clone();
				let value = self.call(&l, EQ_METHOD, vec![rhs.clone()])?;
				value.as_bool().ok_or(InterpreterError::NonBoolComparison)
			}
			(Object::None, Object::None) => Ok(true),
			_ => Err(InterpreterError::IncomparableTypes),
		}
	}

	fn less(&mut self, lhs: &Object, rhs: &Object) -> Result<bool, InterpreterError> {
		match (lhs, rhs) {
			(Object::Bool(l), Object::Bool(r)) => Ok(l < r),
			(Object::String(l), Object::String(r)) => Ok(l < r),
			(Object::Number(l), Object::Number(r)) => Ok(l < r),
			(Object::Instance(l), Object::Instance(_)) => {
				let l = l.clone();
				let value = self.call(&l, LT_METHOD, vec![rhs.clone()])?;
				value.as_bool().ok_or(InterpreterError::NonBoolComparison)
			}
			_ => Err(InterpreterError::IncomparableTypes),
		}
	}

	/// Render a value the way `print` and `str(..)` show it. An instance
	/// renders through its zero-argument `__str__` when it has one, and as
	/// the address of its cell otherwise.
	fn stringify(&mut self, object: &Object) -> Result<String, InterpreterError> {
		Ok(match object {
			Object::None => "None".to_string(),
			Object::Number(n) => n.to_string(),
			Object::String(s) => s.clone(),
			Object::Bool(true) => "True".to_string(),
			Object::Bool(false) => "False".to_string(),
			Object::Class(class) => class.to_string(),
			Object::Instance(instance) => {
				if instance.borrow().has_method(STR_METHOD, 0) {
					let value = self.call(instance, STR_METHOD, Vec::new())?;
					self.stringify(&value)?
				} else {
					format!("{:p}", instance.as_ptr())
				}
			}
		})
	}
}

fn method_closure(method: &Method, instance: &RcCell<InstanceValue>, args: Vec<Object>) -> Closure {
	let mut closure = Closure::new();
	closure.insert(SELF_VAR.to_string(), Object::Instance(instance.clone()));
	for (param, arg) in method.formal_params.iter().zip(args) {
		closure.insert(param.clone(), arg);
	}
	closure
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lexer::Lexer, parser::Parser};

	/// Run a program through the whole pipeline, returning what it printed.
	fn run(source: &str) -> String {
		try_run(source).unwrap()
	}

	fn try_run(source: &str) -> Result<String, InterpreterError> {
		let lexer = Lexer::new(source).unwrap();
		let program = Parser::new(lexer).parse().unwrap();
		let mut output = Vec::new();
		let mut globals = Closure::new();
		Interpreter::new(&mut output).execute(&program, &mut globals)?;
		Ok(String::from_utf8(output).unwrap())
	}

	#[test]
	fn print_arithmetic() {
		assert_eq!(run("print 1+2*3"), "7\n");
		assert_eq!(run("print 2*3+1"), "7\n");
		assert_eq!(run("print 10 - 2 - 3"), "5\n");
		assert_eq!(run("print (1+2)*3"), "9\n");
	}

	#[test]
	fn division_truncates_toward_zero() {
		assert_eq!(run("print 7 / 2"), "3\n");
		assert_eq!(run("x = 0 - 7\nprint x / 2"), "-3\n");
	}

	#[test]
	fn division_by_zero() {
		let error = try_run("print 1/0").unwrap_err();
		assert!(error.to_string().contains("Division by zero"));
	}

	#[test]
	fn string_concatenation() {
		assert_eq!(run("x = 'hello'\nprint x + ' world'"), "hello world\n");
	}

	#[test]
	fn mixed_addition_is_an_error() {
		assert!(matches!(try_run("print 1 + 'x'"), Err(InterpreterError::UnsupportedOperands("+"))));
		assert!(matches!(try_run("print 'x' * 'y'"), Err(InterpreterError::UnsupportedOperands("*"))));
	}

	#[test]
	fn print_multiple_values_and_none() {
		assert_eq!(run("print 1, 'two', True, None"), "1 two True None\n");
		assert_eq!(run("print"), "\n");
	}

	#[test]
	fn empty_string_literal_reads_as_none() {
		assert_eq!(run("x = ''\nprint x"), "None\n");
	}

	#[test]
	fn assignment_yields_and_rebinding_works() {
		assert_eq!(run("x = 1\nx = x + 1\nprint x"), "2\n");
	}

	#[test]
	fn undefined_variable() {
		let error = try_run("print missing").unwrap_err();
		assert!(error.to_string().contains("'missing' not found"));
	}

	#[test]
	fn if_else() {
		assert_eq!(run("if 1 < 2:\n  print 'a'\nelse:\n  print 'b'"), "a\n");
		assert_eq!(run("if 2 < 1:\n  print 'a'\nelse:\n  print 'b'"), "b\n");
		assert_eq!(run("if 0:\n  print 'skipped'\nprint 'after'"), "after\n");
	}

	#[test]
	fn comparisons() {
		assert_eq!(run("print 1 < 2, 2 <= 2, 3 > 2, 2 >= 3"), "True True True False\n");
		assert_eq!(run("print 1 == 1, 1 != 1"), "True False\n");
		assert_eq!(run("print 'abc' < 'abd', 'a' == 'a'"), "True True\n");
		assert_eq!(run("print True > False"), "True\n");
		assert_eq!(run("print None == None"), "True\n");
	}

	#[test]
	fn comparing_different_types_is_an_error() {
		assert!(matches!(try_run("print 1 == 'one'"), Err(InterpreterError::IncomparableTypes)));
		assert!(matches!(try_run("print None < 1"), Err(InterpreterError::IncomparableTypes)));
	}

	#[test]
	fn logic_operators() {
		assert_eq!(run("print 1 and 'x', 0 and 1, 1 or 0, 0 or 0"), "True False True False\n");
		assert_eq!(run("print not 0, not 'x'"), "True False\n");
	}

	#[test]
	fn logic_operators_evaluate_both_sides() {
		// The right operand runs even when the left already decides.
		let source = "class Probe:
  def hit():
    print 'hit'
    return False
p = Probe()
print True or p.hit()
print False and p.hit()";
		assert_eq!(run(source), "hit\nTrue\nhit\nFalse\n");
	}

	#[test]
	fn class_definition_prints_as_class() {
		assert_eq!(run("class P:\n  def go():\n    return 1\nprint P"), "Class P\n");
	}

	#[test]
	fn instance_str_method() {
		assert_eq!(run("class P:\n  def __str__():\n    return 'point'\nprint P()"), "point\n");
	}

	#[test]
	fn instance_without_str_prints_address() {
		let output = run("class P:\n  def go():\n    return 1\nprint P()");
		assert!(output.starts_with("0x"), "got: {output}");
	}

	#[test]
	fn init_sets_fields() {
		let source = "class Point:
  def __init__(x, y):
    self.x = x
    self.y = y
p = Point(1, 2)
print p.x, p.y";
		assert_eq!(run(source), "1 2\n");
	}

	#[test]
	fn missing_init_skips_construction() {
		// No matching-arity __init__: the instance is still produced.
		let source = "class Bag:
  def __init__(x):
    self.x = x
b = Bag()
print b.x";
		assert_eq!(run(source), "None\n");
	}

	#[test]
	fn field_assignment_and_default() {
		let source = "class Bag:
  def nop():
    return None
b = Bag()
print b.missing
b.x = 41
b.x = b.x + 1
print b.x";
		assert_eq!(run(source), "None\n42\n");
	}

	#[test]
	fn methods_share_self_with_the_caller() {
		let source = "class Counter:
  def bump():
    self.n = self.n + 1
c = Counter()
c.n = 0
c.bump()
c.bump()
print c.n";
		assert_eq!(run(source), "2\n");
	}

	#[test]
	fn inheritance_dispatches_to_the_override() {
		let source = "class Animal:
  def greet():
    return 'generic'
  def kind():
    return 'animal'
class Dog(Animal):
  def greet():
    return 'woof'
d = Dog()
print d.greet(), d.kind()";
		assert_eq!(run(source), "woof animal\n");
	}

	#[test]
	fn return_exits_through_nested_blocks() {
		let source = "class Finder:
  def sign(x):
    if x > 0:
      if x > 100:
        return 'huge'
      return 'pos'
    return 'neg'
f = Finder()
print f.sign(200), f.sign(5), f.sign(0)";
		assert_eq!(run(source), "huge pos neg\n");
	}

	#[test]
	fn method_without_return_yields_none() {
		let source = "class Quiet:
  def nothing():
    x = 1
q = Quiet()
print q.nothing()";
		assert_eq!(run(source), "None\n");
	}

	#[test]
	fn top_level_return_is_an_error() {
		let error = try_run("return 1").unwrap_err();
		assert!(matches!(error, InterpreterError::Return(_)));
		assert!(error.to_string().contains("outside of a method body"));
	}

	#[test]
	fn add_method_dispatch() {
		let source = "class Vec:
  def __init__(x):
    self.x = x
  def __add__(rhs):
    return Vec(self.x + rhs.x)
  def __str__():
    return str(self.x)
v = Vec(1) + Vec(2)
print v";
		assert_eq!(run(source), "3\n");
	}

	#[test]
	fn instance_comparison_dispatch() {
		let source = "class Num:
  def __init__(v):
    self.v = v
  def __eq__(rhs):
    return self.v == rhs.v
  def __lt__(rhs):
    return self.v < rhs.v
a = Num(1)
b = Num(2)
print a < b, a == b, a != b, a <= b, a > b, a >= b";
		assert_eq!(run(source), "True False True True False False\n");
	}

	#[test]
	fn unknown_method_and_bad_arity() {
		let source = "class Quiet:
  def nothing():
    return None
q = Quiet()
q.missing()";
		let error = try_run(source).unwrap_err();
		assert!(error.to_string().contains("has no method 'missing'"));

		let source = "class Quiet:
  def nothing():
    return None
q = Quiet()
q.nothing(1)";
		let error = try_run(source).unwrap_err();
		assert!(error.to_string().contains("taking 1 arguments"));
	}

	#[test]
	fn stringify_builtin() {
		assert_eq!(run("print str(42) + '!'"), "42!\n");
		assert_eq!(run("print str(None), str(True), str('already')"), "None True already\n");
	}

	#[test]
	fn dotted_reads_walk_instance_fields() {
		let source = "class Inner:
  def nop():
    return None
class Outer:
  def nop():
    return None
o = Outer()
o.child = Inner()
o.child.tag = 7
print o.child.tag";
		assert_eq!(run(source), "7\n");
	}

	#[test]
	fn dotted_read_through_a_scalar_is_an_error() {
		let error = try_run("x = 1\nprint x.field").unwrap_err();
		assert!(matches!(error, InterpreterError::NotAnInstance(_)));
	}
}
