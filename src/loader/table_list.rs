/*!
Table-list text format: one or more tables back to back, each a `WxH`
header line followed by `H` space-separated integer rows (the same shape
`Table::to_table_list_lines` serializes). `LOAD`'s `FILE_TABLE` mode reads
a whole file of these into consecutive memory addresses; `SAVE` writes a
single table back out in the same shape.
*/

use std::fs;

use crate::error::{EngineError, EngineResult};
use crate::memory::Memory;
use crate::table::Table;

/// Parses every table-list entry out of `contents`.
pub fn parse_table_list(contents: &str) -> EngineResult<Vec<Table>> {
    let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut tables = Vec::new();
    while let Some(header) = lines.next() {
        let (w, h) = header.split_once('x').ok_or_else(|| {
            EngineError::load(format!("expected a WxH header, got {header:?}"))
        })?;
        let width: usize = w.parse().map_err(|_| EngineError::load(format!("bad table width {w:?}")))?;
        let height: usize = h.parse().map_err(|_| EngineError::load(format!("bad table height {h:?}")))?;
        let mut table = Table::new(width, height);
        for row in 0..height {
            let row_text = lines.next().ok_or_else(|| {
                EngineError::load(format!("table-list entry {width}x{height} is missing row {row}"))
            })?;
            let values: Vec<i64> = row_text
                .split_whitespace()
                .map(|cell| cell.parse::<i64>().map_err(|_| EngineError::load(format!("bad cell value {cell:?}"))))
                .collect::<EngineResult<_>>()?;
            if values.len() != width {
                return Err(EngineError::load(format!(
                    "table-list entry {width}x{height} row {row} has {} cells, expected {width}",
                    values.len()
                )));
            }
            table.move_to_row(row);
            for value in values {
                table.write_column(value)?;
            }
        }
        table.rewind();
        tables.push(table);
    }
    Ok(tables)
}

/// Loads every table-list entry in `contents` into consecutive addresses
/// starting at `base_address`.
pub fn load_table_list_into_memory(memory: &mut Memory, base_address: usize, contents: &str) -> EngineResult<()> {
    for (offset, table) in parse_table_list(contents)?.into_iter().enumerate() {
        memory.set(base_address + offset, table)?;
    }
    Ok(())
}

/// Reads `path` off disk and loads it as a table-list file.
pub fn load_table_list_file(memory: &mut Memory, base_address: usize, path: &str) -> EngineResult<()> {
    let contents = fs::read_to_string(path)
        .map_err(|err| EngineError::load(format!("reading table-list file {path:?}: {err}")))?;
    load_table_list_into_memory(memory, base_address, &contents)
}

/// Writes a single table to `path` in table-list format.
pub fn save_table_to_file(path: &str, table: &Table) -> EngineResult<()> {
    let contents = table.to_table_list_lines().join("\n") + "\n";
    fs::write(path, contents).map_err(|err| EngineError::load(format!("writing table-list file {path:?}: {err}")))
}
