/*!
Operand reading: one addressing-mode tag followed by mode-specific fields,
yielding a resolved integer (spec.md 4.2). Does not advance the
instruction's cursor to the next row — callers chaining several operands
within one row (`expression`) or moving on deliberately
(`Get_Table_At_Address`) handle that themselves.
*/

use super::Evaluator;
use crate::error::EngineResult;
use crate::opcode::AddressingMode;

impl<'a> Evaluator<'a> {
    pub fn read_operand(&mut self) -> EngineResult<i64> {
        let mode_tag = self.read_instruction_column()?;
        let mode = AddressingMode::try_from(mode_tag)?;
        match mode {
            AddressingMode::Value => self.read_instruction_column(),
            AddressingMode::Immediate => {
                let addr = self.read_instruction_column()?;
                self.memory().get_mut(addr)?.value_at_row(0)
            }
            AddressingMode::Pointer => {
                let addr = self.read_instruction_column()?;
                let inner = self.memory().get_mut(addr)?.value_at_row(0)?;
                self.memory().get_mut(inner)?.value_at_row(0)
            }
            AddressingMode::Stack => {
                let offset = self.read_instruction_column()?;
                let addr = self.stack_pointer as i64 - offset;
                self.memory().get_mut(addr)?.value_at_row(0)
            }
            AddressingMode::ObjectImmediate => {
                let addr = self.read_instruction_column()?;
                let prop = self.read_instruction_column()?;
                self.memory().get_mut(addr)?.value_at_row(prop as usize)
            }
            AddressingMode::ObjectPointer => {
                let addr = self.read_instruction_column()?;
                let prop = self.read_instruction_column()?;
                let inner = self.memory().get_mut(addr)?.value_at_row(0)?;
                self.memory().get_mut(inner)?.value_at_row(prop as usize)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Memory;
    use crate::opcode::AddressingMode;
    use crate::table::Table;

    fn write_instruction_row(table: &mut Table, fields: &[i64]) {
        for &f in fields {
            table.write_column(f).unwrap();
        }
    }

    #[test]
    fn value_mode_yields_the_literal() {
        let mut memory = Memory::new(2, 4, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[AddressingMode::Value.tag(), 42]);
            instr.rewind();
        }
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_operand().unwrap(), 42);
    }

    #[test]
    fn immediate_mode_reads_target_column_zero() {
        let mut memory = Memory::new(3, 4, 4);
        memory.get_mut_usize(2).unwrap().write_column(7).unwrap();
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[AddressingMode::Immediate.tag(), 2]);
            instr.rewind();
        }
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_operand().unwrap(), 7);
    }

    #[test]
    fn pointer_mode_double_dereferences() {
        let mut memory = Memory::new(4, 4, 4);
        memory.get_mut_usize(2).unwrap().write_column(3).unwrap(); // addr 2 -> points at 3
        memory.get_mut_usize(3).unwrap().write_column(99).unwrap();
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[AddressingMode::Pointer.tag(), 2]);
            instr.rewind();
        }
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_operand().unwrap(), 99);
    }

    #[test]
    fn stack_mode_is_one_based_and_reversed() {
        let mut memory = Memory::new(410, 4, 4);
        memory.get_mut_usize(399).unwrap().write_column(11).unwrap();
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[AddressingMode::Stack.tag(), 1]);
            instr.rewind();
        }
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_operand().unwrap(), 11);
    }

    #[test]
    fn object_immediate_reads_given_row() {
        let mut memory = Memory::new(3, 4, 4);
        memory.get_mut_usize(2).unwrap().write_value_at_row(2, 55).unwrap();
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[AddressingMode::ObjectImmediate.tag(), 2, 2]);
            instr.rewind();
        }
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_operand().unwrap(), 55);
    }

    #[test]
    fn resolving_same_mode_and_address_twice_yields_same_value() {
        let mut memory = Memory::new(3, 4, 4);
        memory.get_mut_usize(2).unwrap().write_column(21).unwrap();
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[AddressingMode::Immediate.tag(), 2]);
            instr.rewind();
        }
        let first = {
            let mut eval = Evaluator::new(&mut memory, 0, 400);
            eval.read_operand().unwrap()
        };
        {
            let instr = memory.get_mut_usize(0).unwrap();
            instr.rewind();
        }
        let second = {
            let mut eval = Evaluator::new(&mut memory, 0, 400);
            eval.read_operand().unwrap()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_addressing_mode_is_a_decode_error() {
        let mut memory = Memory::new(2, 4, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_instruction_row(instr, &[99, 0]);
            instr.rewind();
        }
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert!(eval.read_operand().is_err());
    }
}
