/*!
The evaluator: three layered readers (operand, expression, conditional)
plus `Get_Table_At_Address`'s write-target resolution, all driven by the
same in-place cursor on the instruction `Table` currently being executed
(spec.md 4).

Every method here borrows `Memory` only for the duration of a single field
read or a single target-table lookup — it never holds a `&mut Table`
across calls. That is what lets an instruction reference its own address
(self-modifying code, and the deliberate `STORE`/`VALUE` self-reference
quirk in spec.md 9) without the evaluator running into Rust's aliasing
rules: every access goes back through `Memory`'s checked indexing.

Split into submodules the way the teacher's unrealized `cpu/addressing.rs`
+ `cpu/execute.rs` scaffold intended to (see DESIGN.md) — `operand`,
`expression`, `conditional`, `address` each add one `impl<'a> Evaluator<'a>`
block.
*/

mod address;
mod conditional;
mod expression;
mod operand;

pub use address::{write_target, WriteTarget};

use crate::error::EngineResult;
use crate::memory::Memory;

pub struct Evaluator<'a> {
    memory: &'a mut Memory,
    instruction_address: usize,
    stack_pointer: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(memory: &'a mut Memory, instruction_address: usize, stack_pointer: usize) -> Self {
        Evaluator {
            memory,
            instruction_address,
            stack_pointer,
        }
    }

    pub fn memory(&mut self) -> &mut Memory {
        self.memory
    }

    /// Reads the next column from the instruction table's own cursor.
    fn read_instruction_column(&mut self) -> EngineResult<i64> {
        self.memory
            .get_mut_usize(self.instruction_address)?
            .read_column()
    }

    fn move_instruction_to_next_row(&mut self) -> EngineResult<()> {
        self.memory
            .get_mut_usize(self.instruction_address)?
            .move_to_next_row();
        Ok(())
    }
}
