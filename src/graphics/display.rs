use std::fmt::{self, Display, Formatter};

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::conversion::{DEFAULT_PRECISION, format_general};

/// Prints a vector as `(x, y, z, w)` or a matrix as four tab separated rows, with every component
/// in the shortest form that keeps `precision` significant digits.
#[derive(Debug, Clone, Copy)]
pub struct Shown<T> {
    pub value: T,
    pub precision: usize,
}

impl<T> Shown<T> {
    pub const fn new(value: T) -> Shown<T> {
        Shown {
            value,
            precision: DEFAULT_PRECISION,
        }
    }

    pub const fn with_precision(value: T, precision: usize) -> Shown<T> {
        Shown { value, precision }
    }

    fn write_components(&self, f: &mut Formatter<'_>, components: &[f32]) -> fmt::Result {
        f.write_str("(")?;
        for (i, component) in components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&format_general(f64::from(*component), self.precision))?;
        }
        f.write_str(")")
    }
}

impl Display for Shown<Vec2> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_components(f, &self.value.to_array())
    }
}

impl Display for Shown<Vec3> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_components(f, &self.value.to_array())
    }
}

impl Display for Shown<Vec4> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_components(f, &self.value.to_array())
    }
}

impl Display for Shown<f32> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&format_general(f64::from(self.value), self.precision))
    }
}

impl Display for Shown<Mat4> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            for component in self.value.row(i).to_array() {
                f.write_str(&format_general(f64::from(component), self.precision))?;
                f.write_str("\t")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Shorthand for [`Shown::new`].
pub const fn shown<T>(value: T) -> Shown<T> {
    Shown::new(value)
}
