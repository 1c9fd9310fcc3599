/*!
`TEST`, `JUMP`, `CALL`, `RETURN`, `STOP` (spec.md 4.4): everything that
moves `command_pointer` around, plus the two opcodes that push/pop a
return address across it.
*/

use crate::error::EngineResult;
use crate::evaluator::Evaluator;
use crate::host::Host;
use crate::memory::Memory;
use crate::opcode::TAKE_NO_JUMP;
use crate::registers::{Registers, Status};
use crate::stack;

pub fn test(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let (condition, on_pass, on_fail) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let condition = eval.read_conditional(host)?;
        let on_pass = eval.read_expression(host)?;
        let on_fail = eval.read_expression(host)?;
        (condition, on_pass, on_fail)
    };
    if condition != 0 {
        if on_pass != TAKE_NO_JUMP {
            registers.command_pointer = on_pass as usize;
        }
    } else if on_fail != TAKE_NO_JUMP {
        registers.command_pointer = on_fail as usize;
    }
    Ok(())
}

pub fn jump(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let target = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.read_expression(host)?
    };
    registers.command_pointer = target as usize;
    Ok(())
}

pub fn call(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let target = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.read_expression(host)?
    };
    // command_pointer already advanced past this instruction during fetch;
    // that is the return address RETURN should restore.
    stack::push(memory, registers, registers.command_pointer as i64)?;
    registers.command_pointer = target as usize;
    Ok(())
}

pub fn ret(
    _instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    _host: &mut dyn Host,
) -> EngineResult<()> {
    let target = stack::pop(memory, registers)?;
    registers.command_pointer = target as usize;
    Ok(())
}

pub fn stop(
    _instruction_address: usize,
    _memory: &mut Memory,
    registers: &mut Registers,
    _host: &mut dyn Host,
) -> EngineResult<()> {
    registers.status = Status::Done;
    Ok(())
}
