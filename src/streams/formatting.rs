use std::collections::BTreeMap;
use std::fmt::Write;

use crate::tour::{TourError, Transcript};

/// Right aligns `value` in `width` columns with exactly `decimals` digits after the point.
pub fn padded(value: f64, width: usize, decimals: usize) -> String {
    format!("{value:>width$.decimals$}")
}

/// The character code of `c` in decimal and hexadecimal.
pub fn char_codes(c: char) -> String {
    let code = c as u32;
    format!("'{c}' = {code}(dec)/{code:x}(hex)")
}

/// Joins `key:value` pairs with commas, the way a string buffer would collect them.
pub fn join_pairs<K, V>(pairs: &BTreeMap<K, V>) -> Result<String, std::fmt::Error>
where
    K: std::fmt::Display,
    V: std::fmt::Display,
{
    let mut buf = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            buf.write_char(',')?;
        }
        write!(buf, "{key}:{value}")?;
    }
    Ok(buf)
}

pub fn run_formatting(out: &mut Transcript) -> Result<(), TourError> {
    let n = 123.456789;
    for decimals in 1..=3 {
        out.token(padded(n, 10, decimals))?;
    }

    out.token(padded(4.5_f64.powf(5.0), 10, 2))?;
    out.token(format_args!("{:.6}", 2.72))?;

    for c in ('I'..='K').chain('7'..='9') {
        out.token(char_codes(c))?;
    }

    out.token(true)?;
    out.token(false)?;
    out.token(u8::from(true))?;

    let mut buf = String::new();
    write!(buf, "{} {:.4}", 5, 3.56789)?;
    out.token(buf)?;

    let pairs = BTreeMap::from([("a", 1.0), ("b", 2.2)]);
    out.token(join_pairs(&pairs)?)?;
    Ok(())
}
