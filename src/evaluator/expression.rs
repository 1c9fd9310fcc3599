/*!
Expression evaluation: a strictly left-to-right infix chain of operands
joined by arithmetic operators, terminated by `Operator::None` (spec.md
4.2). No precedence — each operator applies immediately to the running
accumulator and the next operand.

The `3.15` factor in `SINE`/`COSINE` is the source's rounded approximation
of pi and is preserved bit-for-bit (spec.md 9); this is a source artifact,
not a typo, and changing it would break bit-exact compatibility with
existing C-Lesh programs.
*/

use super::Evaluator;
use crate::error::EngineResult;
use crate::host::Host;
use crate::opcode::Operator;

/// The source's rounded pi, preserved exactly — do not "fix" to
/// `std::f64::consts::PI`.
const TRIG_CONSTANT: f64 = 3.15;

impl<'a> Evaluator<'a> {
    pub fn read_expression(&mut self, host: &mut dyn Host) -> EngineResult<i64> {
        let mut accumulator = self.read_operand()?;
        loop {
            let op_tag = self.read_instruction_column()?;
            let operator = Operator::try_from(op_tag)?;
            if operator == Operator::None {
                break;
            }
            let rhs = self.read_operand()?;
            accumulator = apply_operator(operator, accumulator, rhs, host);
        }
        self.move_instruction_to_next_row()?;
        Ok(accumulator)
    }
}

fn apply_operator(operator: Operator, lhs: i64, rhs: i64, host: &mut dyn Host) -> i64 {
    match operator {
        Operator::Add => lhs.wrapping_add(rhs),
        Operator::Subtract => lhs.wrapping_sub(rhs),
        Operator::Multiply => lhs.wrapping_mul(rhs),
        Operator::Divide => {
            if rhs == 0 {
                lhs
            } else {
                lhs.wrapping_div(rhs)
            }
        }
        Operator::Remainder => {
            if rhs == 0 {
                0
            } else {
                lhs.wrapping_rem(rhs)
            }
        }
        Operator::Random => host.random(lhs, rhs),
        Operator::Cosine => {
            let radians = rhs as f64 * TRIG_CONSTANT / 180.0;
            (lhs as f64 * radians.cos()).round() as i64
        }
        Operator::Sine => {
            let radians = rhs as f64 * TRIG_CONSTANT / 180.0;
            (lhs as f64 * radians.sin()).round() as i64
        }
        Operator::None => unreachable!("None terminates read_expression before reaching here"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::memory::Memory;
    use crate::opcode::AddressingMode;
    use crate::table::Table;

    fn write_value(table: &mut Table, value: i64) {
        table.write_column(AddressingMode::Value.tag()).unwrap();
        table.write_column(value).unwrap();
    }

    #[test]
    fn strict_left_to_right_no_precedence() {
        // value 3 ADD value 4 MULTIPLY value 2 NONE == 14, not 11.
        let mut memory = Memory::new(1, 16, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_value(instr, 3);
            instr.write_column(Operator::Add.tag()).unwrap();
            write_value(instr, 4);
            instr.write_column(Operator::Multiply.tag()).unwrap();
            write_value(instr, 2);
            instr.write_column(Operator::None.tag()).unwrap();
            instr.rewind();
        }
        let mut host = NullHost::default();
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_expression(&mut host).unwrap(), 14);
    }

    #[test]
    fn division_by_zero_leaves_accumulator_unchanged() {
        let mut memory = Memory::new(1, 16, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_value(instr, 9);
            instr.write_column(Operator::Divide.tag()).unwrap();
            write_value(instr, 0);
            instr.write_column(Operator::None.tag()).unwrap();
            instr.rewind();
        }
        let mut host = NullHost::default();
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_expression(&mut host).unwrap(), 9);
    }

    #[test]
    fn remainder_by_zero_yields_zero() {
        let mut memory = Memory::new(1, 16, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_value(instr, 9);
            instr.write_column(Operator::Remainder.tag()).unwrap();
            write_value(instr, 0);
            instr.write_column(Operator::None.tag()).unwrap();
            instr.rewind();
        }
        let mut host = NullHost::default();
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_expression(&mut host).unwrap(), 0);
    }

    #[test]
    fn single_operand_with_no_operators() {
        let mut memory = Memory::new(1, 8, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_value(instr, 5);
            instr.write_column(Operator::None.tag()).unwrap();
            instr.rewind();
        }
        let mut host = NullHost::default();
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_expression(&mut host).unwrap(), 5);
    }
}
