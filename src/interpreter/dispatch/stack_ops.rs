/*!
`PUSH`, `POP` (spec.md 4.4): `PUSH` evaluates one expression and pushes it;
`POP` resolves a write target and stores the popped value there.
*/

use crate::error::EngineResult;
use crate::evaluator::{write_target, Evaluator};
use crate::host::Host;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack;

pub fn push(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let value = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.read_expression(host)?
    };
    stack::push(memory, registers, value)
}

pub fn pop(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    _host: &mut dyn Host,
) -> EngineResult<()> {
    let target = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.resolve_write_target()?
    };
    let value = stack::pop(memory, registers)?;
    write_target(memory, target, instruction_address, value)
}
