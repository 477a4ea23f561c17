//! Arithmetic Logic Unit (ALU).
//!
//! Computes the value-producing register operations of the E20. The same unit
//! serves opcode `000` and the immediate forms (`addi` reuses `Add`, `slti`
//! reuses `Slt`).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Slt

/// 16-bit wrapping arithmetic.
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

use crate::isa::AluFunct;

/// Arithmetic Logic Unit for 16-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand.
    ///
    /// # Returns
    ///
    /// The result for value-producing operations. `Jr` and undefined function
    /// codes produce no register value and return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use e20_core::core::units::alu::Alu;
    /// use e20_core::isa::AluFunct;
    ///
    /// assert_eq!(Alu::execute(AluFunct::Add, 0xFFFF, 2), Some(1));
    /// assert_eq!(Alu::execute(AluFunct::Slt, 3, 5), Some(1));
    /// assert_eq!(Alu::execute(AluFunct::Jr, 3, 5), None);
    /// ```
    pub const fn execute(op: AluFunct, a: u16, b: u16) -> Option<u16> {
        match op {
            AluFunct::Add | AluFunct::Sub => Some(arithmetic::execute(op, a, b)),
            AluFunct::Or | AluFunct::And | AluFunct::Slt => Some(logic::execute(op, a, b)),
            AluFunct::Jr | AluFunct::Undefined(_) => None,
        }
    }
}
