/*!
`Table`: the fixed-size 2D integer grid with a read/write cursor that is the
sole data structure of the C-Lesh memory model. An instruction, a stack
slot, a string buffer, and a plain data table are all just `Table`s read
with different conventions layered on top by the evaluator and dispatcher.

Cursor semantics (preserved bit-for-bit from the source):
- `rewind` resets the cursor to `(0, 0)`.
- `read_column`/`write_column` touch the cell under the cursor, then advance
  the column. When the advance would pass the last column of the row, the
  column wraps to `0` but the row is **not** advanced — this is a load-
  bearing behavioral quirk (see spec.md 4.1), not a bug to fix.
- `move_to_next_row`/`move_to_row`/`move_to_column` are the only ways the
  row advances; a row set (directly or via wrap-around logic elsewhere)
  outside `[0, height)` turns the next cell access into a fault rather than
  silently clamping.
*/

use crate::error::{EngineError, EngineResult};

#[derive(Clone, Debug)]
pub struct Table {
    width: usize,
    height: usize,
    cells: Vec<i64>,
    row: usize,
    column: usize,
}

impl Table {
    pub fn new(width: usize, height: usize) -> Self {
        Table {
            width,
            height,
            cells: vec![0; width * height],
            row: 0,
            column: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn rewind(&mut self) {
        self.row = 0;
        self.column = 0;
    }

    pub fn move_to_next_row(&mut self) {
        self.row += 1;
        self.column = 0;
    }

    pub fn move_to_row(&mut self, row: usize) {
        self.row = row;
        self.column = 0;
    }

    pub fn move_to_column(&mut self, column: usize) {
        self.column = column;
    }

    fn cell_index(&self, row: usize, column: usize) -> EngineResult<usize> {
        if row >= self.height {
            return Err(EngineError::address_fault(format!(
                "table row {row} out of range (height {})",
                self.height
            )));
        }
        if column >= self.width {
            return Err(EngineError::address_fault(format!(
                "table column {column} out of range (width {})",
                self.width
            )));
        }
        Ok(row * self.width + column)
    }

    fn advance_column(&mut self) {
        self.column += 1;
        if self.column >= self.width {
            self.column = 0;
        }
    }

    pub fn read_column(&mut self) -> EngineResult<i64> {
        let idx = self.cell_index(self.row, self.column)?;
        let value = self.cells[idx];
        self.advance_column();
        Ok(value)
    }

    pub fn write_column(&mut self, value: i64) -> EngineResult<()> {
        let idx = self.cell_index(self.row, self.column)?;
        self.cells[idx] = value;
        self.advance_column();
        Ok(())
    }

    /// Rewinds, moves to `row`, and reads column 0 — the access pattern
    /// every addressing mode uses to fetch "column 0 of row N" of a target
    /// table without disturbing which row the *caller's* cursor is on.
    pub fn value_at_row(&mut self, row: usize) -> EngineResult<i64> {
        self.rewind();
        self.move_to_row(row);
        self.read_column()
    }

    pub fn write_value_at_row(&mut self, row: usize, value: i64) -> EngineResult<()> {
        self.rewind();
        self.move_to_row(row);
        self.write_column(value)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![0; width * height];
        self.rewind();
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = 0);
        self.rewind();
    }

    /// Raw row access for diagnostics (`DUMP`) and table-list persistence.
    pub fn row_cells(&self, row: usize) -> &[i64] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Serializes as a table-list entry: a `WxH` header line followed by
    /// `height` space-separated integer rows.
    pub fn to_table_list_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.height + 1);
        lines.push(format!("{}x{}", self.width, self.height));
        for row in 0..self.height {
            let row_text = self
                .row_cells(row)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(row_text);
        }
        lines
    }
}
