/*!
`Engine`: owns every piece of live state — `Memory`, `Registers`, the
`PictureBuffer`, and the host — and is the top-level entry point
`main.rs` drives. Grounded on the teacher's `Bus` struct (`src/bus.rs`),
which played the same "everything the CPU touches lives behind one
struct" role for the 6502 core.
*/

use crate::error::EngineResult;
use crate::host::{Host, PictureBuffer};
use crate::interpreter::Interpreter;
use crate::loader::EngineConfig;
use crate::memory::Memory;
use crate::registers::{Registers, Status};

pub struct Engine {
    pub memory: Memory,
    pub registers: Registers,
    pub picture_buffer: PictureBuffer,
    pub host: Box<dyn Host>,
}

impl Engine {
    pub fn new(config: EngineConfig, host: Box<dyn Host>) -> Self {
        Engine {
            memory: Memory::new(config.memory_count, config.table_width, config.table_height),
            registers: Registers::new(config.program_address, config.stack_pointer),
            picture_buffer: PictureBuffer::new(config.table_width, config.table_height),
            host,
        }
    }

    pub fn status(&self) -> Status {
        self.registers.status
    }

    /// Runs one fetch/decode/dispatch cycle.
    pub fn step(&mut self) -> EngineResult<()> {
        Interpreter::step(&mut self.memory, &mut self.registers, self.host.as_mut(), &mut self.picture_buffer)
    }

    /// Runs until `Status` leaves `Running` or `time_budget_ms` elapses.
    pub fn execute(&mut self, time_budget_ms: u64) -> EngineResult<()> {
        Interpreter::execute(
            &mut self.memory,
            &mut self.registers,
            self.host.as_mut(),
            &mut self.picture_buffer,
            time_budget_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::opcode::Opcode;

    #[test]
    fn engine_runs_a_stop_program_to_completion() {
        let config = EngineConfig {
            table_width: 4,
            table_height: 4,
            memory_count: 8,
            program_address: 0,
            stack_pointer: 4,
        };
        let mut engine = Engine::new(config, Box::new(NullHost::default()));
        engine.memory.get_mut_usize(0).unwrap().write_column(Opcode::Stop.tag()).unwrap();
        engine.execute(1000).unwrap();
        assert_eq!(engine.status(), Status::Done);
    }
}
