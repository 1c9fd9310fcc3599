/*!
Fetch/decode/dispatch: `Interpreter::step` runs exactly one instruction,
`Interpreter::execute` time-slices a run until `Status` leaves `Running` or
a wall-clock budget expires (spec.md 5).

A table's cursor is rewound and its opcode column read before
`command_pointer` is advanced and the cursor is moved to row 1, so every
dispatch function always starts reading operands from the first operand
row regardless of how many rows the previous pass through this instruction
consumed.
*/

mod dispatch;

use std::time::Instant;

use crate::error::EngineResult;
use crate::host::{Host, PictureBuffer};
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::registers::{Registers, Status};

pub struct Interpreter;

impl Interpreter {
    /// Fetches, decodes, and executes exactly one instruction.
    pub fn step(
        memory: &mut Memory,
        registers: &mut Registers,
        host: &mut dyn Host,
        picture_buffer: &mut PictureBuffer,
    ) -> EngineResult<()> {
        let instruction_address = registers.command_pointer;
        let opcode_tag = {
            let instruction = memory.get_mut_usize(instruction_address)?;
            instruction.rewind();
            instruction.read_column()?
        };
        let opcode = Opcode::try_from(opcode_tag)?;
        registers.command_pointer += 1;
        memory.get_mut_usize(instruction_address)?.move_to_next_row();

        dispatch::execute(opcode, instruction_address, memory, registers, host, picture_buffer)
    }

    /// Runs instructions until `status` leaves `Running` or `time_budget_ms`
    /// of wall-clock time elapses, whichever comes first (spec.md 5). A
    /// monotonic clock stands in for the source's `CLOCKS_PER_SEC`-based
    /// timer; cooperative, single-threaded, no internal suspension except
    /// what `TIMEOUT` delegates to the host.
    pub fn execute(
        memory: &mut Memory,
        registers: &mut Registers,
        host: &mut dyn Host,
        picture_buffer: &mut PictureBuffer,
        time_budget_ms: u64,
    ) -> EngineResult<()> {
        registers.status = Status::Running;
        let start = Instant::now();
        while registers.status == Status::Running {
            if start.elapsed().as_millis() as u64 >= time_budget_ms {
                break;
            }
            if let Err(err) = Self::step(memory, registers, host, picture_buffer) {
                registers.status = Status::Error;
                return Err(err);
            }
        }
        Ok(())
    }
}
