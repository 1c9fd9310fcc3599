/*!
`Get_Table_At_Address` (spec.md 4.3): resolves a destination for `STORE`,
`POP`, and `INPUT` by reading a mode (and address, and for object modes a
property row) from one metadata row, then advancing to the next row.

Unlike plain operand reads, `VALUE` mode here does *not* yield a literal to
use — it means "the instruction's own table is the destination," the
deliberate, preserved self-reference quirk STORE exhibits when its
destination mode is `VALUE` (spec.md 9). The mode's address-shaped field is
still consumed to keep every addressing mode's column layout uniform, even
though `SelfInstruction` doesn't use its value.
*/

use super::Evaluator;
use crate::error::EngineResult;
use crate::memory::Memory;
use crate::opcode::AddressingMode;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WriteTarget {
    /// Destination mode was `VALUE`: write lands in the instruction's own
    /// row 0, column 0 (see module doc).
    SelfInstruction,
    /// Destination is column 0 of `row` in the table at `address`.
    Table { address: i64, row: usize },
}

impl<'a> Evaluator<'a> {
    pub fn resolve_write_target(&mut self) -> EngineResult<WriteTarget> {
        let mode_tag = self.read_instruction_column()?;
        let mode = AddressingMode::try_from(mode_tag)?;
        let target = match mode {
            AddressingMode::Value => {
                let _unused = self.read_instruction_column()?;
                WriteTarget::SelfInstruction
            }
            AddressingMode::Immediate => {
                let addr = self.read_instruction_column()?;
                WriteTarget::Table { address: addr, row: 0 }
            }
            AddressingMode::Pointer => {
                let addr = self.read_instruction_column()?;
                let inner = self.memory().get_mut(addr)?.value_at_row(0)?;
                WriteTarget::Table { address: inner, row: 0 }
            }
            AddressingMode::Stack => {
                let offset = self.read_instruction_column()?;
                WriteTarget::Table { address: self.stack_pointer as i64 - offset, row: 0 }
            }
            AddressingMode::ObjectImmediate => {
                let addr = self.read_instruction_column()?;
                let prop = self.read_instruction_column()?;
                WriteTarget::Table { address: addr, row: prop as usize }
            }
            AddressingMode::ObjectPointer => {
                let addr = self.read_instruction_column()?;
                let prop = self.read_instruction_column()?;
                let inner = self.memory().get_mut(addr)?.value_at_row(0)?;
                WriteTarget::Table { address: inner, row: prop as usize }
            }
        };
        self.move_instruction_to_next_row()?;
        Ok(target)
    }

    /// Writes `value` to a previously resolved `WriteTarget`.
    pub fn write_to_target(
        &mut self,
        target: WriteTarget,
        instruction_address: usize,
        value: i64,
    ) -> EngineResult<()> {
        write_target(self.memory(), target, instruction_address, value)
    }
}

/// Free-standing form of `Evaluator::write_to_target`, for dispatch code
/// that must resolve a target, perform an unrelated `Memory`-borrowing
/// operation (a stack pop, say), and only then write — keeping the
/// `Evaluator` alive across that gap would hold `Memory` borrowed the
/// whole time.
pub fn write_target(
    memory: &mut Memory,
    target: WriteTarget,
    instruction_address: usize,
    value: i64,
) -> EngineResult<()> {
    match target {
        WriteTarget::SelfInstruction => {
            memory.get_mut_usize(instruction_address)?.write_value_at_row(0, value)
        }
        WriteTarget::Table { address, row } => {
            memory.get_mut(address)?.write_value_at_row(row, value)
        }
    }
}
