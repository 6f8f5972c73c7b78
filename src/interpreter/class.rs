use std::{fmt::Display, rc::Rc};

use crate::statement::Statement;

/// A method compiled from a `def` block. `self` is not in the formal list;
/// it is bound implicitly when the method is invoked.
#[derive(Debug)]
pub struct Method {
	pub name:          String,
	pub formal_params: Vec<String>,
	/// The body, rooted at a `MethodBody` node.
	pub body:          Rc<Statement>,
}

/// A class definition: a name, a method table frozen at definition time, and
/// at most one parent class.
#[derive(Debug)]
pub struct ClassValue {
	name:    String,
	methods: Vec<Method>,
	parent:  Option<Rc<ClassValue>>,
}

impl ClassValue {
	pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<ClassValue>>) -> Self {
		Self { name, methods, parent }
	}

	pub fn name(&self) -> &str { &self.name }

	/// Resolve `name` through the inheritance chain, nearest class first.
	pub fn method(&self, name: &str) -> Option<&Method> {
		let mut class = Some(self);
		while let Some(c) = class {
			if let Some(method) = c.methods.iter().find(|m| m.name == name) {
				return Some(method);
			}
			class = c.parent.as_deref();
		}
		None
	}
}

impl Display for ClassValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "Class {}", self.name) }
}
