use std::rc::Rc;

use crate::interpreter::{class::ClassValue, object::{Closure, Object}};

/// A single object produced by instantiating a class: a reference to the
/// class plus this instance's own mutable field map.
#[derive(Debug)]
pub struct InstanceValue {
	class:  Rc<ClassValue>,
	fields: Closure,
}

impl InstanceValue {
	pub fn new(class: Rc<ClassValue>) -> Self { Self { class, fields: Closure::new() } }

	pub fn class(&self) -> &Rc<ClassValue> { &self.class }

	/// Whether the class chain defines `name` with exactly this many formal
	/// parameters.
	pub fn has_method(&self, name: &str, argument_count: usize) -> bool {
		self.class.method(name).is_some_and(|m| m.formal_params.len() == argument_count)
	}

	/// Read a field. Fields never written read as `None`.
	pub fn field(&self, name: &str) -> Object { self.fields.get(name).cloned().unwrap_or(Object::None) }

	pub fn set_field(&mut self, name: &str, value: Object) { self.fields.insert(name.to_string(), value); }
}
