/*!
Conditional evaluation: a chain of conditions joined by logic operators
(spec.md 4.2). Each condition is `expression, test, expression`; the test
computes `diff = right - left` and yields `1`/`0` for whether the named
relation holds against zero. `AND` multiplies the running result by the
next condition, `OR` adds it — arithmetic combination, not boolean
short-circuiting, and that is a deliberate, preserved behavior: callers
must treat any non-zero result as true (spec.md 4.2).

The chain is terminated by `LogicOp::None` (see `opcode.rs` and DESIGN.md's
Open Question decisions for why that convention was introduced).
*/

use super::Evaluator;
use crate::error::EngineResult;
use crate::host::Host;
use crate::opcode::{LogicOp, TestOp};

impl<'a> Evaluator<'a> {
    pub fn read_conditional(&mut self, host: &mut dyn Host) -> EngineResult<i64> {
        let mut accumulator = self.read_condition(host)?;
        loop {
            let logic_tag = self.read_instruction_column()?;
            let logic = LogicOp::try_from(logic_tag)?;
            self.move_instruction_to_next_row()?;
            match logic {
                LogicOp::None => break,
                LogicOp::And => accumulator *= self.read_condition(host)?,
                LogicOp::Or => accumulator += self.read_condition(host)?,
            }
        }
        Ok(accumulator)
    }

    fn read_condition(&mut self, host: &mut dyn Host) -> EngineResult<i64> {
        let left = self.read_expression(host)?;
        let test_tag = self.read_instruction_column()?;
        let test = TestOp::try_from(test_tag)?;
        self.move_instruction_to_next_row()?;
        let right = self.read_expression(host)?;
        let diff = right.wrapping_sub(left);
        Ok(if test_holds(test, diff) { 1 } else { 0 })
    }
}

fn test_holds(test: TestOp, diff: i64) -> bool {
    match test {
        TestOp::Equals => diff == 0,
        TestOp::Not => diff != 0,
        TestOp::Less => diff > 0,
        TestOp::Greater => diff < 0,
        TestOp::LessOrEqual => diff >= 0,
        TestOp::GreaterOrEqual => diff <= 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::memory::Memory;
    use crate::opcode::{AddressingMode, Operator};
    use crate::table::Table;

    fn write_value_expr(table: &mut Table, value: i64) {
        table.write_column(AddressingMode::Value.tag()).unwrap();
        table.write_column(value).unwrap();
        table.write_column(Operator::None.tag()).unwrap();
    }

    #[test]
    fn less_scenario_from_spec() {
        // condition `value 3 LESS value 5` should be true.
        let mut memory = Memory::new(1, 8, 4);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_value_expr(instr, 3);
            instr.move_to_next_row();
            instr.write_column(TestOp::Less.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 5);
            instr.move_to_next_row();
            instr.write_column(LogicOp::None.tag()).unwrap();
            instr.rewind();
        }
        let mut host = NullHost::default();
        let mut eval = Evaluator::new(&mut memory, 0, 400);
        assert_eq!(eval.read_conditional(&mut host).unwrap(), 1);
    }

    #[test]
    fn and_multiplies_or_adds() {
        // (0 EQUALS 0) AND (1 EQUALS 2) == 0
        let mut memory = Memory::new(1, 16, 8);
        {
            let instr = memory.get_mut_usize(0).unwrap();
            write_value_expr(instr, 0);
            instr.move_to_next_row();
            instr.write_column(TestOp::Equals.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 0);
            instr.move_to_next_row();
            instr.write_column(LogicOp::And.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 1);
            instr.move_to_next_row();
            instr.write_column(TestOp::Equals.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 2);
            instr.move_to_next_row();
            instr.write_column(LogicOp::None.tag()).unwrap();
            instr.rewind();
        }
        let mut host = NullHost::default();
        let and_result = {
            let mut eval = Evaluator::new(&mut memory, 0, 400);
            eval.read_conditional(&mut host).unwrap()
        };
        assert_eq!(and_result, 0);

        // Same conditions with OR instead of AND evaluate to 1.
        {
            let instr = memory.get_mut_usize(0).unwrap();
            instr.rewind();
            write_value_expr(instr, 0);
            instr.move_to_next_row();
            instr.write_column(TestOp::Equals.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 0);
            instr.move_to_next_row();
            instr.write_column(LogicOp::Or.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 1);
            instr.move_to_next_row();
            instr.write_column(TestOp::Equals.tag()).unwrap();
            instr.move_to_next_row();
            write_value_expr(instr, 2);
            instr.move_to_next_row();
            instr.write_column(LogicOp::None.tag()).unwrap();
            instr.rewind();
        }
        let or_result = {
            let mut eval = Evaluator::new(&mut memory, 0, 400);
            eval.read_conditional(&mut host).unwrap()
        };
        assert_eq!(or_result, 1);
    }
}
