/*!
Opcode dispatch table: one function per opcode, grouped by concern into the
sibling modules. `execute` is the single match `Interpreter::step` defers
to after decoding the opcode tag.
*/

mod control_flow;
mod diagnostics;
mod io_ops;
mod memory_ops;
mod stack_ops;

use crate::error::EngineResult;
use crate::host::{Host, PictureBuffer};
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::registers::Registers;

pub fn execute(
    opcode: Opcode,
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
    picture_buffer: &mut PictureBuffer,
) -> EngineResult<()> {
    match opcode {
        Opcode::Store => memory_ops::store(instruction_address, memory, registers, host),
        Opcode::Dump => diagnostics::dump(instruction_address, memory, registers, host),
        Opcode::Test => control_flow::test(instruction_address, memory, registers, host),
        Opcode::Jump => control_flow::jump(instruction_address, memory, registers, host),
        Opcode::Call => control_flow::call(instruction_address, memory, registers, host),
        Opcode::Return => control_flow::ret(instruction_address, memory, registers, host),
        Opcode::Push => stack_ops::push(instruction_address, memory, registers, host),
        Opcode::Pop => stack_ops::pop(instruction_address, memory, registers, host),
        Opcode::Load => io_ops::load(instruction_address, memory, registers, host),
        Opcode::Save => io_ops::save(instruction_address, memory, registers, host),
        Opcode::Input => io_ops::input(instruction_address, memory, registers, host),
        Opcode::Refresh => io_ops::refresh(instruction_address, memory, registers, host, picture_buffer),
        Opcode::Sound => io_ops::sound(instruction_address, memory, registers, host),
        Opcode::Timeout => io_ops::timeout(instruction_address, memory, registers, host),
        Opcode::Output => io_ops::output(instruction_address, memory, registers, host),
        Opcode::StringOp => io_ops::string_compare(instruction_address, memory, registers, host),
        Opcode::Palette => io_ops::palette(instruction_address, memory, registers, host),
        Opcode::Draw => io_ops::draw(instruction_address, memory, registers, host, picture_buffer),
        Opcode::Clear => io_ops::clear(instruction_address, memory, registers, host, picture_buffer),
        Opcode::Resize => memory_ops::resize(instruction_address, memory, registers, host),
        Opcode::Column => memory_ops::column(instruction_address, memory, registers, host),
        Opcode::Stop => control_flow::stop(instruction_address, memory, registers, host),
    }
}
