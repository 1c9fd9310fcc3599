/*!
The C-Lesh string format: a `Table` holding a length-prefixed run of integer
character codes. Column 0 of row 0 is the letter count `n`; the next `n`
columns (wrapping across rows) are either literal character codes or the
marker `'@'` (0x40), which consumes one popped stack value and substitutes
its decimal rendering (spec.md 3, 4.6).

Row-wrap note: `Table::read_column`'s wrap policy (spec.md 4.1) only resets
the column, it never advances the row on its own — by design, so a
fixed-width operand list can occupy a known number of columns within one
row. A string, by contrast, is meant to keep reading forward across row
boundaries, so the decoder watches for the column-wrap signal and
explicitly calls `move_to_next_row` when it fires; that is what spec.md 4.6
means by "the cursor walks across row boundaries via the Table's natural
wrap policy" — the policy supplies the signal, the string reader supplies
the row hop.

`decode_string_at`/`read_string_operand` re-fetch the target table by
address for every single field, the same pattern `Evaluator` uses, so that
a `'@'` substitution's stack pop (which mutates `Memory`) never overlaps a
live borrow of the string table itself.
*/

use crate::error::EngineResult;
use crate::evaluator::Evaluator;
use crate::host::Host;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack;
use crate::table::Table;

const AT_MARKER: i64 = 0x40; // '@'

/// Reads one cell (the length prefix or a character) and, if that read
/// wrapped the column back to 0, advances the row too — unlike
/// `Table::read_column`'s bare column-wrap, so a width-1 table still makes
/// forward progress instead of re-reading the same cell.
fn read_wrapping_cell(table: &mut Table) -> EngineResult<i64> {
    let width = table.width();
    let column_before = table.column();
    let value = table.read_column()?;
    if width > 0 && column_before == width - 1 {
        table.move_to_next_row();
    }
    Ok(value)
}

/// Write-side counterpart of `read_wrapping_cell`, used for both the length
/// prefix and each character so encode/decode agree on cursor position cell
/// for cell regardless of table width.
fn write_wrapping_cell(table: &mut Table, value: i64) -> EngineResult<()> {
    let width = table.width();
    let column_before = table.column();
    table.write_column(value)?;
    if width > 0 && column_before == width - 1 {
        table.move_to_next_row();
    }
    Ok(())
}

/// Decodes a standalone table (not necessarily memory-resident) as a
/// C-Lesh string.
pub fn decode_string(
    table: &mut Table,
    memory: &mut Memory,
    registers: &mut Registers,
) -> EngineResult<String> {
    table.rewind();
    let count = read_wrapping_cell(table)?;
    let mut out = String::with_capacity(count.max(0) as usize);
    for _ in 0..count {
        let code = read_wrapping_cell(table)?;
        if code == AT_MARKER {
            let popped = stack::pop(memory, registers)?;
            out.push_str(&popped.to_string());
        } else {
            out.push(char::from_u32(code as u32).unwrap_or('\u{FFFD}'));
        }
    }
    Ok(out)
}

/// Decodes the string at `address` within `memory`. Re-resolves the table
/// by address on every field read so a `'@'` stack pop never aliases a live
/// borrow of the string table.
pub fn decode_string_at(
    memory: &mut Memory,
    registers: &mut Registers,
    address: i64,
) -> EngineResult<String> {
    let count = {
        let table = memory.get_mut(address)?;
        table.rewind();
        read_wrapping_cell(table)?
    };
    let mut out = String::with_capacity(count.max(0) as usize);
    for _ in 0..count {
        let code = {
            let table = memory.get_mut(address)?;
            read_wrapping_cell(table)?
        };
        if code == AT_MARKER {
            let popped = stack::pop(memory, registers)?;
            out.push_str(&popped.to_string());
        } else {
            out.push(char::from_u32(code as u32).unwrap_or('\u{FFFD}'));
        }
    }
    Ok(out)
}

/// Reads a "...-string" instruction parameter: an expression yielding the
/// address of a string table, which is then decoded. The common shape
/// behind `LOAD`'s source name, `SAVE`'s/`SOUND`'s/`PALETTE`'s name, and
/// `OUTPUT`'s/`STRING`'s text parameters (spec.md 4.4).
pub fn read_string_operand(
    memory: &mut Memory,
    registers: &mut Registers,
    instruction_address: usize,
    host: &mut dyn Host,
) -> EngineResult<String> {
    let address = {
        let mut eval = Evaluator::new(memory, instruction_address, registers.stack_pointer);
        eval.read_expression(host)?
    };
    decode_string_at(memory, registers, address)
}

/// Encodes `text` into a freshly allocated `width x height` table using the
/// same length-prefix format `decode_string` reads. No `'@'` substitution
/// is performed on encode — callers who want the placeholder write it as a
/// literal `0x40` character code directly.
pub fn encode_string(text: &str, width: usize, height: usize) -> Table {
    let mut table = Table::new(width, height);
    write_wrapping_cell(&mut table, text.chars().count() as i64).ok();
    for ch in text.chars() {
        write_wrapping_cell(&mut table, ch as i64).ok();
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_plain_string() {
        let mut table = encode_string("hello", 4, 4);
        let mut memory = Memory::new(1, 4, 4);
        let mut registers = Registers::new(0, 0);
        let decoded = decode_string(&mut table, &mut memory, &mut registers).unwrap();
        assert_eq!(decoded, "hello");
    }

    #[test]
    fn at_marker_substitutes_one_popped_stack_value() {
        // [3, 'A', '@', 'B'] with stack top = 9 decodes to "A9B", popping once.
        let mut table = Table::new(4, 1);
        table.write_column(3).unwrap();
        table.write_column('A' as i64).unwrap();
        table.write_column(AT_MARKER).unwrap();
        table.write_column('B' as i64).unwrap();

        let mut memory = Memory::new(401, 4, 4);
        let mut registers = Registers::new(0, 400);
        stack::push(&mut memory, &mut registers, 9).unwrap();

        let decoded = decode_string(&mut table, &mut memory, &mut registers).unwrap();
        assert_eq!(decoded, "A9B");
        assert_eq!(registers.stack_pointer, 400); // exactly one value popped
    }

    #[test]
    fn string_spans_multiple_rows() {
        // width 2: "abcd" needs two rows of two columns after the count cell
        // wraps into row 1.
        let mut table = Table::new(2, 3);
        table.write_column(4).unwrap();
        table.write_column('a' as i64).unwrap(); // wraps col->0, row advances to 1
        table.write_column('b' as i64).unwrap();
        table.write_column('c' as i64).unwrap(); // wraps again, row advances to 2
        table.write_column('d' as i64).unwrap();

        let mut memory = Memory::new(1, 2, 2);
        let mut registers = Registers::new(0, 0);
        let decoded = decode_string(&mut table, &mut memory, &mut registers).unwrap();
        assert_eq!(decoded, "abcd");
    }

    #[test]
    fn width_one_table_still_advances_past_the_length_prefix() {
        // Every cell is the last column of its row, so the length-prefix
        // read must hop to row 1 instead of re-reading itself as the first
        // character.
        let mut table = encode_string("hi", 1, 3);
        let mut memory = Memory::new(1, 1, 1);
        let mut registers = Registers::new(0, 0);
        let decoded = decode_string(&mut table, &mut memory, &mut registers).unwrap();
        assert_eq!(decoded, "hi");
    }

    #[test]
    fn decode_string_at_resolves_by_memory_address() {
        let mut memory = Memory::new(2, 6, 2);
        {
            let table = memory.get_mut_usize(1).unwrap();
            table.write_column(2).unwrap();
            table.write_column('h' as i64).unwrap();
            table.write_column('i' as i64).unwrap();
        }
        let mut registers = Registers::new(0, 0);
        let decoded = decode_string_at(&mut memory, &mut registers, 1).unwrap();
        assert_eq!(decoded, "hi");
    }
}
