use super::compile::compile;
use super::{Address, Opcode};
use crate::lang::Error;
use tracing::debug;

/// ## Compiled program
///
/// One opcode per source line. Errors from every line are collected
/// so they can all be reported before anything runs.

#[derive(Debug, Default)]
pub struct Program {
    ops: Vec<Opcode>,
    errors: Vec<Error>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn compile<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.ops.clear();
        self.errors.clear();
        for (index, line) in lines.iter().enumerate() {
            match compile(line.as_ref()) {
                Ok(op) => self.ops.push(op),
                Err(e) => {
                    self.errors.push(e.in_line_number(Some(index + 1)));
                    self.ops.push(Opcode::Nop);
                }
            }
        }
        debug!(ops = self.ops.len(), errors = self.errors.len(), "program compiled");
    }

    /// Record a diagnostic found outside the compiler. Errors stay in
    /// line order.
    pub fn error(&mut self, error: Error) {
        self.errors.push(error);
        self.errors.sort_by_key(|e| e.line_number());
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn op(&self, addr: Address) -> Option<&Opcode> {
        self.ops.get(addr)
    }

    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}
