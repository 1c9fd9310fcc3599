/*!
Engine registers: `command_pointer`, `stack_pointer`, and `status`.

Grounded on `src/cpu6502.rs`'s flat register struct (`a, x, y, sp, pc,
status`) — here there is no general-purpose register file, just the three
values spec.md 3 names.
*/

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Done,
    Error,
}

#[derive(Clone, Debug)]
pub struct Registers {
    pub command_pointer: usize,
    pub stack_pointer: usize,
    pub initial_stack_pointer: usize,
    pub status: Status,
}

impl Registers {
    pub fn new(command_pointer: usize, stack_pointer: usize) -> Self {
        Registers {
            command_pointer,
            stack_pointer,
            initial_stack_pointer: stack_pointer,
            status: Status::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_configured_pointers() {
        let regs = Registers::new(10, 400);
        assert_eq!(regs.status, Status::Idle);
        assert_eq!(regs.command_pointer, 10);
        assert_eq!(regs.stack_pointer, 400);
        assert_eq!(regs.initial_stack_pointer, 400);
    }
}
