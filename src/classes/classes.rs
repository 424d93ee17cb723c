use std::rc::Rc;
use std::sync::atomic::Ordering;

use super::{
    Account, COUNTER, Complex, Constants, Derived, Employee, Extended, Formatted, Named, Person,
    Value, as_named, cast_named, describe,
};
use crate::tour::{EventLog, TourError, Transcript};

fn people(out: &mut Transcript) -> Result<(), TourError> {
    let a: Rc<dyn Named> = Rc::new(Person::new("A"));
    let b: Rc<dyn Named> = Rc::new(Employee::new("B"));
    let c: Rc<Employee> = Rc::new(Employee::new("C"));
    out.tokens([a.name(), b.name(), c.name()])?;

    let person = Person::new("Per");
    let employee = Employee::new("Emp");
    let as_base: &dyn Named = &employee;

    if let Some(found) = as_named::<Employee>(as_base) {
        out.token(found.name())?;
    }
    match cast_named::<Employee>(as_base) {
        Ok(found) => out.token(found.name())?,
        Err(_) => out.token("CastError")?,
    }
    match cast_named::<Employee>(&person) {
        Ok(found) => out.token(found.name())?,
        Err(_) => out.token("CastError")?,
    }
    out.token(match as_named::<Employee>(&person) {
        Some(_) => "OK",
        None => "NULL",
    })?;
    Ok(())
}

fn complex_copies(out: &mut Transcript) -> Result<(), TourError> {
    let log = EventLog::new();

    let z = Complex::zero(&log);
    out.token(format_args!("z={z}"))?;

    let mut z1 = Complex::new(&log, 1.1, 2.3);
    out.token(format_args!("z1={z1}"))?;

    let mut z2 = z1.clone();
    log.drain_into(out)?;
    out.token(format_args!("z2={z2}"))?;

    z2.set(8.0, 4.2);
    z1.clone_from(&z2);
    log.drain_into(out)?;
    out.token(format_args!("z1={z1}"))?;

    let z3 = z1.clone();
    log.drain_into(out)?;
    out.token(format_args!("z3={z3}"))?;

    // Default-constructed collections never copy.
    let array: [Complex; 3] = std::array::from_fn(|_| Complex::zero(&log));
    let vector: Vec<Complex> = (0..3).map(|_| Complex::zero(&log)).collect();
    debug_assert_eq!(array.len(), vector.len());

    out.token("Friend:")?;
    let text = describe(z.clone());
    log.drain_into(out)?;
    out.token(text)?;
    Ok(())
}

fn lifecycle(out: &mut Transcript) -> Result<(), TourError> {
    let log = EventLog::new();
    {
        let _derived = Derived::new(&log, 8);
    }
    log.drain_into(out)?;
    Ok(())
}

fn logical_constness(out: &mut Transcript) -> Result<(), TourError> {
    let obj = Formatted::new();
    out.token(format_args!("IsFormatted={}", obj.is_formatted()))?;
    obj.format();
    out.token(format_args!("IsFormatted={}", obj.is_formatted()))?;
    Ok(())
}

fn slicing(out: &mut Transcript) -> Result<(), TourError> {
    let d = Extended::new(11, 22);
    let b1 = d.sliced();
    out.token(b1.get())?;

    let b2: &dyn Value = &d;
    out.token(b2.get())?;

    let b3: Box<dyn Value> = Box::new(d);
    out.token(b3.get())?;
    Ok(())
}

fn constants(out: &mut Transcript) -> Result<(), TourError> {
    out.token(format_args!("const:{}", Constants::A))?;
    out.token(format_args!("static:{}", COUNTER.load(Ordering::Relaxed)))?;
    Ok(())
}

fn compilation_firewall(out: &mut Transcript) -> Result<(), TourError> {
    let a1 = Account::new(1);
    let a2 = Account::new(2);

    let mut accounts = Vec::new();
    accounts.push(a1);
    accounts.push(a2);

    let values: String = accounts.iter().map(|account| account.my_method().to_string()).collect();
    out.token(values)?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    people(out)?;
    complex_copies(out)?;
    lifecycle(out)?;
    logical_constness(out)?;
    slicing(out)?;
    constants(out)?;
    compilation_firewall(out)?;
    Ok(())
}
