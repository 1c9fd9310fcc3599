/*!
Closed, integer-coded tag spaces: opcodes, addressing modes, arithmetic
operators, logic operators, relational tests, and file-load modes. Every
one of these is a tagged dispatch over a fixed, closed vocabulary — an
unrecognized tag is always a fatal `EngineError::Decode`, never a silent
default. Numeric encodings are the implementer's choice (spec.md leaves the
wire values to the interpreter; the original C++ source was not retrievable
at the distillation stage this crate was built from); what matters is that
each mapping is exhaustive and stable.

Grounded on `src/mapper.rs`'s small closed enum (`MapperMirroring`) plus the
teacher's own (unwired) `cpu6502.rs::AddrMode`/`ExecKind` scaffold, which is
the closest precedent in the pack for tag-driven dispatch over a fixed
opcode space.
*/

use crate::error::{EngineError, EngineResult};

/// Sentinel branch target meaning "do not take this branch" (spec.md 4.4).
/// Addresses are always non-negative table indices, so `-1` can never
/// collide with a real jump target.
pub const TAKE_NO_JUMP: i64 = -1;

macro_rules! closed_tag_enum {
    ($name:ident, $err_label:literal, { $($variant:ident = $value:expr),+ $(,)? }) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl TryFrom<i64> for $name {
            type Error = EngineError;

            fn try_from(tag: i64) -> EngineResult<Self> {
                match tag {
                    $($value => Ok($name::$variant),)+
                    other => Err(EngineError::decode(format!(
                        "unknown {} tag {other}", $err_label
                    ))),
                }
            }
        }

        impl $name {
            pub fn tag(self) -> i64 {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }
    };
}

closed_tag_enum!(Opcode, "opcode", {
    Store = 0,
    Dump = 1,
    Test = 2,
    Jump = 3,
    Call = 4,
    Return = 5,
    Push = 6,
    Pop = 7,
    Load = 8,
    Save = 9,
    Input = 10,
    Refresh = 11,
    Sound = 12,
    Timeout = 13,
    Output = 14,
    StringOp = 15,
    Palette = 16,
    Draw = 17,
    Clear = 18,
    Resize = 19,
    Column = 20,
    Stop = 21,
});

closed_tag_enum!(AddressingMode, "addressing mode", {
    Value = 0,
    Immediate = 1,
    Pointer = 2,
    Stack = 3,
    ObjectImmediate = 4,
    ObjectPointer = 5,
});

closed_tag_enum!(Operator, "operator", {
    None = 0,
    Add = 1,
    Subtract = 2,
    Multiply = 3,
    Divide = 4,
    Remainder = 5,
    Random = 6,
    Cosine = 7,
    Sine = 8,
});

// `None` terminates a conditional's chain of logic operators, mirroring
// `Operator::None`'s role in expressions (spec.md's conditional grammar
// doesn't name an explicit terminator; this convention disambiguates the
// end of the chain from the `TEST` opcode's subsequent pass/fail
// expressions — see DESIGN.md's Open Question decisions).
closed_tag_enum!(LogicOp, "logic operator", {
    And = 0,
    Or = 1,
    None = 2,
});

closed_tag_enum!(TestOp, "test", {
    Equals = 0,
    Not = 1,
    Less = 2,
    Greater = 3,
    LessOrEqual = 4,
    GreaterOrEqual = 5,
});

closed_tag_enum!(FileMode, "file mode", {
    FileList = 0,
    FileTable = 1,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_opcode_tag() {
        for tag in 0..=21 {
            assert!(Opcode::try_from(tag).is_ok());
        }
    }

    #[test]
    fn unknown_opcode_is_a_decode_error() {
        assert!(Opcode::try_from(999).is_err());
        assert!(AddressingMode::try_from(-7).is_err());
    }

    #[test]
    fn tag_round_trips() {
        assert_eq!(Opcode::try_from(Opcode::Call.tag()).unwrap(), Opcode::Call);
        assert_eq!(
            AddressingMode::try_from(AddressingMode::Stack.tag()).unwrap(),
            AddressingMode::Stack
        );
    }
}
