/*!
`STORE`, `RESIZE`, `COLUMN` (spec.md 4.4): direct table mutation that
doesn't go through the stack.
*/

use crate::error::EngineResult;
use crate::evaluator::{Evaluator, WriteTarget};
use crate::host::Host;
use crate::memory::Memory;
use crate::registers::Registers;

pub fn store(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
    let target = eval.resolve_write_target()?;
    let value = eval.read_expression(host)?;
    if target == WriteTarget::SelfInstruction {
        tracing::warn!(
            instruction_address,
            "STORE destination resolved to VALUE mode; writing into the \
             instruction's own table (preserved self-reference quirk)"
        );
    }
    eval.write_to_target(target, instruction_address, value)
}

pub fn resize(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let (address, width, height) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let address = eval.read_expression(host)?;
        let width = eval.read_expression(host)?;
        let height = eval.read_expression(host)?;
        (address, width, height)
    };
    let table = memory.get_mut(address)?;
    table.resize(width.max(0) as usize, height.max(0) as usize);
    Ok(())
}

pub fn column(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let (source_address, index) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let source_address = eval.read_expression(host)?;
        let index = eval.read_expression(host)?;
        (source_address, index)
    };
    let value = {
        let source = memory.get_mut(source_address)?;
        source.move_to_column(index.max(0) as usize);
        source.read_column()?
    };
    let target = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.resolve_write_target()?
    };
    crate::evaluator::write_target(memory, target, instruction_address, value)
}
