/*!
`LOAD`'s `FILE_LIST` mode: each named file holds exactly one table (a
single `WxH` header plus its rows), loaded into consecutive memory
addresses in the order the names were given.
*/

use std::fs;

use crate::error::{EngineError, EngineResult};
use crate::memory::Memory;
use crate::loader::table_list::parse_table_list;

pub fn load_file_list(memory: &mut Memory, base_address: usize, paths: &[String]) -> EngineResult<()> {
    for (offset, path) in paths.iter().enumerate() {
        let contents = fs::read_to_string(path)
            .map_err(|err| EngineError::load(format!("reading file-list entry {path:?}: {err}")))?;
        let mut tables = parse_table_list(&contents)?;
        if tables.len() != 1 {
            return Err(EngineError::load(format!(
                "file-list entry {path:?} must contain exactly one table, found {}",
                tables.len()
            )));
        }
        memory.set(base_address + offset, tables.remove(0))?;
    }
    Ok(())
}
