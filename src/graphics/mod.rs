//! A module containing graphics math on top of `glam`: vector helpers, the [`Plane`] type and the
//! graphics topic.
//!
//! Everything follows the column vector convention, so a transform is applied as `matrix * vector`
//! and a translation sits in the last column of its matrix.

mod display;
mod graphics;
mod plane;
mod tests;
mod vectors;

pub use display::*;
pub use graphics::*;
pub use plane::*;
pub use vectors::*;
