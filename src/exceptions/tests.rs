#![cfg(test)]

use super::*;
use crate::tour::Transcript;

#[test]
fn test_leaf_errors_land_in_their_branch() {
    let exc: Exception = InvalidArgument::new("nope").into();
    assert!(exc.is_logic());
    assert_eq!(exc.to_string(), "nope", "An exception displays only its message.");

    let exc: Exception = UnderflowError::new("too small").into();
    assert!(exc.is_runtime());
    assert!(Exception::from(BadCast).is_bad_cast());
}

#[test]
fn test_most_specific_handler_wins() {
    assert_eq!(catch_most_specific(&OutOfRange::new("i").into()), "out_of_range");
    assert_eq!(catch_most_specific(&LengthError::new("l").into()), "logic_error");
    assert_eq!(catch_most_specific(&RangeError::new("r").into()), "runtime_error");
    assert_eq!(catch_most_specific(&OverflowError::new("o").into()), "overflow_error");
}

#[test]
fn test_checked_access() {
    let values = [1, 2, 3];
    assert_eq!(at(&values, 2), Ok(&3));
    assert!(at(&values, 3).is_err(), "Reading past the end must fail instead of panicking.");
}

#[test]
fn test_exceptions_topic() {
    let mut out = Transcript::new();
    run(&mut out).unwrap();
    assert_eq!(
        out.as_str(),
        "An error occurred invalid vector subscript deallocation out_of_range logic_error \
         overflow_error bad_cast "
    );
}
