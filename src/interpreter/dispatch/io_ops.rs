/*!
`LOAD`, `SAVE`, `INPUT`, `REFRESH`, `SOUND`, `TIMEOUT`, `OUTPUT`, `STRING`,
`PALETTE`, `DRAW`, `CLEAR` (spec.md 4.4): the opcodes that cross the host
boundary or touch the filesystem loader. Everything that needs a
"...-string" parameter goes through `string_codec::read_string_operand`.
*/

use crate::error::EngineResult;
use crate::evaluator::{write_target, Evaluator};
use crate::host::{Host, PictureBuffer};
use crate::loader::{file_list, table_list};
use crate::memory::Memory;
use crate::opcode::FileMode;
use crate::registers::Registers;
use crate::string_codec::read_string_operand;

pub fn load(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let source_name = read_string_operand(memory, registers, instruction_address, host)?;
    let (mode_tag, base_address) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let mode_tag = eval.read_expression(host)?;
        let base_address = eval.read_expression(host)?;
        (mode_tag, base_address)
    };
    let mode = FileMode::try_from(mode_tag)?;
    match mode {
        FileMode::FileList => {
            let paths: Vec<String> = source_name.split(',').map(str::trim).map(String::from).collect();
            file_list::load_file_list(memory, base_address.max(0) as usize, &paths)
        }
        FileMode::FileTable => table_list::load_table_list_file(memory, base_address.max(0) as usize, &source_name),
    }
}

pub fn save(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let object_address = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.read_expression(host)?
    };
    let name = read_string_operand(memory, registers, instruction_address, host)?;
    let table = memory.get(object_address)?;
    table_list::save_table_to_file(&name, table)
}

pub fn input(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let target = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.resolve_write_target()?
    };
    let code = host.read_signal().code;
    write_target(memory, target, instruction_address, code)
}

pub fn refresh(
    _instruction_address: usize,
    _memory: &mut Memory,
    _registers: &mut Registers,
    host: &mut dyn Host,
    picture_buffer: &mut PictureBuffer,
) -> EngineResult<()> {
    host.update_display(picture_buffer);
    Ok(())
}

pub fn sound(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let name = read_string_operand(memory, registers, instruction_address, host)?;
    host.play_sound(&name)
}

pub fn timeout(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let milliseconds = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.read_expression(host)?
    };
    host.sleep(milliseconds);
    Ok(())
}

pub fn output(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let text = read_string_operand(memory, registers, instruction_address, host)?;
    let (x, y, r, g, b) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let x = eval.read_expression(host)?;
        let y = eval.read_expression(host)?;
        let r = eval.read_expression(host)?;
        let g = eval.read_expression(host)?;
        let b = eval.read_expression(host)?;
        (x, y, r, g, b)
    };
    host.output_text(&text, x, y, r, g, b);
    Ok(())
}

pub fn string_compare(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let first = read_string_operand(memory, registers, instruction_address, host)?;
    let second = read_string_operand(memory, registers, instruction_address, host)?;
    let target = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.resolve_write_target()?
    };
    let equal = if first == second { 1 } else { 0 };
    write_target(memory, target, instruction_address, equal)
}

pub fn palette(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
) -> EngineResult<()> {
    let name = read_string_operand(memory, registers, instruction_address, host)?;
    host.load_palette(&name)
}

pub fn draw(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
    picture_buffer: &mut PictureBuffer,
) -> EngineResult<()> {
    let (picture_address, x, y, mode) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let picture_address = eval.read_expression(host)?;
        let x = eval.read_expression(host)?;
        let y = eval.read_expression(host)?;
        let mode = eval.read_expression(host)?;
        (picture_address, x, y, mode)
    };
    let picture = memory.get(picture_address)?;
    picture_buffer.draw_picture(picture, x, y, mode)
}

pub fn clear(
    instruction_address: usize,
    memory: &mut Memory,
    registers: &mut Registers,
    host: &mut dyn Host,
    picture_buffer: &mut PictureBuffer,
) -> EngineResult<()> {
    let (r, g, b) = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        let r = eval.read_expression(host)?;
        let g = eval.read_expression(host)?;
        let b = eval.read_expression(host)?;
        (r, g, b)
    };
    picture_buffer.clear_screen(r, g, b);
    Ok(())
}
