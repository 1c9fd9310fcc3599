/*!
`Memory`: a fixed-length, checked-index array of `Table`s. Every address the
evaluator or interpreter resolves — instructions, data, stack slots — goes
through `Memory::get`/`Memory::get_mut`, so there is exactly one place that
enforces spec.md 3's "out-of-range is a fatal fault" rule.

All accesses go through an address rather than holding a borrowed `Table`
across multiple operations; this is what lets an instruction address its
own table (self-modifying code, and the `STORE`/`VALUE` self-reference
quirk in spec.md 9) without running into aliasing issues in the evaluator.
*/

use crate::error::{EngineError, EngineResult};
use crate::table::Table;

pub struct Memory {
    tables: Vec<Table>,
}

impl Memory {
    /// Allocates `count` tables, each `width x height`, all zero-filled.
    pub fn new(count: usize, width: usize, height: usize) -> Self {
        Memory {
            tables: (0..count).map(|_| Table::new(width, height)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn checked_address(&self, address: i64) -> EngineResult<usize> {
        if address < 0 || address as usize >= self.tables.len() {
            return Err(EngineError::address_fault(format!(
                "memory address {address} out of range (0..{})",
                self.tables.len()
            )));
        }
        Ok(address as usize)
    }

    pub fn get(&self, address: i64) -> EngineResult<&Table> {
        let idx = self.checked_address(address)?;
        Ok(&self.tables[idx])
    }

    pub fn get_mut(&mut self, address: i64) -> EngineResult<&mut Table> {
        let idx = self.checked_address(address)?;
        Ok(&mut self.tables[idx])
    }

    pub fn get_usize(&self, address: usize) -> EngineResult<&Table> {
        self.get(address as i64)
    }

    pub fn get_mut_usize(&mut self, address: usize) -> EngineResult<&mut Table> {
        self.get_mut(address as i64)
    }

    /// Overwrites the table at `address` wholesale, including its
    /// dimensions. Used by the table-list/file loaders, whose entries carry
    /// their own `WxH` header rather than conforming to the engine's
    /// configured default table size.
    pub fn set(&mut self, address: usize, table: Table) -> EngineResult<()> {
        let idx = self.checked_address(address as i64)?;
        self.tables[idx] = table;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_address_is_a_fault() {
        let memory = Memory::new(4, 2, 2);
        assert!(memory.get(4).is_err());
        assert!(memory.get(-1).is_err());
        assert!(memory.get(0).is_ok());
        assert!(memory.get(3).is_ok());
    }

    #[test]
    fn tables_start_zeroed() {
        let mut memory = Memory::new(2, 2, 2);
        let table = memory.get_mut(0).unwrap();
        assert_eq!(table.value_at_row(0).unwrap(), 0);
    }
}
