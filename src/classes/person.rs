use std::any::Any;

use crate::exceptions::BadCast;

/// Anything with a display name. Implementors may decorate the name they inherit.
pub trait Named: Any {
    fn name(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}

/// Deliberately neither `Clone` nor `Copy`: a person can be moved or borrowed, never duplicated.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new<S: Into<String>>(name: S) -> Person {
        Person {
            name: name.into(),
        }
    }
}

impl Named for Person {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A person whose name is marked as coming from the derived type.
#[derive(Debug, PartialEq, Eq)]
pub struct Employee {
    person: Person,
}

impl Employee {
    pub fn new<S: Into<String>>(name: S) -> Employee {
        Employee {
            person: Person::new(name),
        }
    }

    pub const fn as_person(&self) -> &Person {
        &self.person
    }
}

impl Named for Employee {
    fn name(&self) -> String {
        self.person.name() + "(derived)"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Downcasts to the concrete type, yielding [`None`] on a mismatch.
pub fn as_named<T: Named>(named: &dyn Named) -> Option<&T> {
    named.as_any().downcast_ref::<T>()
}

/// Downcasts to the concrete type, failing with [`BadCast`] on a mismatch.
pub fn cast_named<T: Named>(named: &dyn Named) -> Result<&T, BadCast> {
    as_named(named).ok_or(BadCast)
}
