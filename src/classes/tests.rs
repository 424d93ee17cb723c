#![cfg(test)]

use super::*;
use crate::exceptions::BadCast;
use crate::tour::{EventLog, Transcript};

#[test]
fn test_derived_name_and_downcasts() {
    let employee = Employee::new("Emp");
    let person = Person::new("Per");

    assert_eq!(employee.name(), "Emp(derived)");
    assert_eq!(employee.as_person().name(), "Emp", "The embedded person keeps the plain name.");
    assert!(as_named::<Employee>(&employee).is_some());
    assert!(as_named::<Employee>(&person).is_none());
    assert_eq!(cast_named::<Employee>(&person), Err(BadCast));
}

#[test]
fn test_complex_traces_copies_only() {
    let log = EventLog::new();
    let z1 = Complex::new(&log, 1.0, 2.0);
    let moved = z1;
    assert!(log.is_empty(), "Moving a value must not be reported as a copy.");

    let mut z2 = moved.clone();
    z2.clone_from(&moved);
    assert_eq!(log.take(), "CopyCtor CopyAssignmentOperator ");
    assert_eq!(z2.to_string(), "(1, 2)");
    assert_eq!(describe(z2), "z=(1, 2)");
}

#[test]
fn test_lifecycle_order() {
    let log = EventLog::new();
    drop(Derived::new(&log, 0));
    assert_eq!(
        log.take(),
        "BaseCtor DerivedCtor DerivedDestr BaseDestr ",
        "The base is built first and torn down last."
    );
}

#[test]
fn test_slicing_loses_override() {
    let d = Extended::new(11, 22);
    assert_eq!(d.sliced().get(), 11);
    assert_eq!(d.get(), 22);
}

#[test]
fn test_logical_constness() {
    let obj = Formatted::new();
    assert!(!obj.is_formatted());
    obj.format();
    obj.format();
    assert!(obj.is_formatted());
}

#[test]
fn test_accounts_survive_moves() {
    let account = Account::new(7);
    let accounts = vec![account];
    assert_eq!(accounts[0].my_method(), 7);
}

#[test]
fn test_classes_topic() {
    let mut out = Transcript::new();
    run(&mut out).unwrap();
    assert_eq!(
        out.as_str(),
        "A B(derived) C(derived) Emp(derived) Emp(derived) CastError NULL \
         z=(0, 0) z1=(1.1, 2.3) CopyCtor z2=(1.1, 2.3) CopyAssignmentOperator z1=(8, 4.2) \
         CopyCtor z3=(8, 4.2) Friend: CopyCtor z=(0, 0) \
         BaseCtor DerivedCtor DerivedDestr BaseDestr \
         IsFormatted=false IsFormatted=true 11 22 22 const:1 static:2 12 "
    );
}
