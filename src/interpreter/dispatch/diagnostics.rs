/*!
`DUMP` (spec.md 4.4): emits registers, status, and every memory table's
contents to the diagnostic sink. This is the engine's only opcode-level
observability hook — everything else that would normally page through a
debugger instead goes through `tracing` at the call sites that need it
(the `STORE`/`VALUE` self-reference warning in `memory_ops::store`, say).
*/

use crate::error::EngineResult;
use crate::host::Host;
use crate::memory::Memory;
use crate::registers::Registers;

pub fn dump(
    _instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    _host: &mut dyn Host,
) -> EngineResult<()> {
    tracing::info!(
        command_pointer = registers.command_pointer,
        stack_pointer = registers.stack_pointer,
        status = ?registers.status,
        "DUMP"
    );
    for (address, table) in memory.iter().enumerate() {
        tracing::info!(address, lines = ?table.to_table_list_lines(), "DUMP table");
    }
    Ok(())
}
