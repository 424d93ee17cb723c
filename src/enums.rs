//! Scoped enums, enums with a chosen representation and enums that convert to integers.

use crate::tour::{TourError, Transcript};

/// Discriminants continue counting up from the first explicit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colors {
    Red = 1,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmyk {
    Cyan,
    Magenta,
    Yellow,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum TestEnum {
    V1,
    V2,
    V3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Lda,
    Sta,
    Pha,
}

impl Opcode {
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Lda => "LDA",
            Opcode::Sta => "STA",
            Opcode::Pha => "PHA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLifecycle {
    Running,
    Suspended,
    NotRunning,
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let col = Colors::Blue;
    if col == Colors::Blue {
        out.token("Blue")?;
    }
    // Comparing a Colors against a Cmyk doesn't type check.

    out.token(Opcode::Lda.mnemonic())?;

    let app1 = AppLifecycle::Running;
    let app2 = AppLifecycle::Suspended;
    out.token(app1 as i32)?;
    out.token(app2 as i32)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    #[test]
    fn test_discriminants() {
        assert_eq!(Colors::Red as i32, 1);
        assert_eq!(Colors::Blue as i32, 3, "Discriminants should count up from the explicit one!");
        assert_eq!(Cmyk::Black as u8, 3);
        assert_eq!(AppLifecycle::NotRunning as i32, 2);
        assert_eq!(TestEnum::V3 as u64, 2);
        assert_eq!(mem::size_of::<TestEnum>(), mem::size_of::<u64>());
    }

    #[test]
    fn test_mnemonics() {
        let names: Vec<_> = [Opcode::Lda, Opcode::Sta, Opcode::Pha].map(Opcode::mnemonic).into();
        assert_eq!(names, ["LDA", "STA", "PHA"]);
    }

    #[test]
    fn test_enums_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(out.as_str(), "Blue LDA 0 1 ");
    }
}
