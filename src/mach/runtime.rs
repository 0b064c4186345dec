use super::{Address, DArray, Opcode, Operation, Program, Stack, Val, Var};
use crate::error;
use crate::lang::{self, Error, Scan, VectorTable};
use std::convert::TryFrom;
use std::sync::Arc;
use tracing::{info, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine

/// Machine state returned by `execute`.
#[derive(Debug, Clone)]
pub enum Event {
    /// Program halted, or never started. Repeats on every call.
    Stopped,
    /// Cycle budget used up, call `execute` again.
    Running,
    /// Output of `write`, newline terminated.
    Print(String),
    /// A `read` waits for `enter`.
    Input,
    /// Compile errors, or the runtime error that halted the program.
    Errors(Arc<Vec<Error>>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Ready,
    Running,
    Input,
    Stopped,
}

pub struct Runtime {
    program: Program,
    pc: Address,
    line: usize,
    stack: Stack<Val>,
    vars: Var,
    vectors: VectorTable,
    cursor: usize,
    state: State,
    input: Option<String>,
    interrupted: bool,
}

impl Runtime {
    /// `lines[i]` is source line `i + 1`. `vectors` holds the vector
    /// literals in program order as the scanner found them.
    pub fn new<S: AsRef<str>>(lines: &[S], vectors: VectorTable) -> Runtime {
        let mut program = Program::new();
        program.compile(lines);
        Runtime {
            program,
            pc: 0,
            line: 0,
            stack: Stack::new("STACK OVERFLOW"),
            vars: Var::new(),
            vectors,
            cursor: 0,
            state: State::Ready,
            input: None,
            interrupted: false,
        }
    }

    /// Scan for the vector table and strip comments in one go.
    pub fn from_source(source: &str) -> Runtime {
        Runtime::from_scan(&lang::program_lines(source), &lang::lex(source))
    }

    /// Takes its vectors from `scan`. Other scan errors are left to the
    /// caller, but a scan error on a `push <<...>>` line means its literal
    /// may be missing from the table, so it becomes a program error and
    /// nothing runs.
    pub fn from_scan<S: AsRef<str>>(lines: &[S], scan: &Scan) -> Runtime {
        let mut runtime = Runtime::new(lines, scan.vectors.clone());
        for error in scan.errors() {
            let vector_line = match error.line_number() {
                Some(n) if n > 0 => runtime.program.op(n - 1) == Some(&Opcode::PushVector),
                _ => false,
            };
            if vector_line {
                runtime
                    .program
                    .error(error.message("VECTOR LITERAL NOT SCANNED"));
            }
        }
        runtime
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// Supply the line a pending `read` waits for.
    pub fn enter(&mut self, s: &str) {
        self.input = Some(s.to_string());
    }

    /// Stop a running program with BREAK on the next `execute`.
    pub fn interrupt(&mut self) {
        if self.state == State::Running || self.state == State::Input {
            self.interrupted = true;
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Ready => {
                if !self.program.errors().is_empty() {
                    self.state = State::Stopped;
                    return Event::Errors(Arc::new(self.program.errors().to_vec()));
                }
                info!(lines = self.program.len(), "program started");
                self.state = State::Running;
            }
            State::Input | State::Running => {}
        }
        if self.interrupted {
            self.interrupted = false;
            return self.halt_with(error!(Break, Some(self.line)));
        }
        if self.state == State::Input {
            match self.input.take() {
                None => return Event::Input,
                Some(s) => {
                    if let Err(e) = Val::from_input(&s).and_then(|v| self.stack.push(v)) {
                        return self.halt_with(e.in_line_number(Some(self.line)));
                    }
                    self.state = State::Running;
                }
            }
        }
        for _ in 0..cycles {
            let op = match self.program.op(self.pc) {
                Some(op) => op.clone(),
                None => return self.halt(),
            };
            self.line = self.pc + 1;
            self.pc += 1;
            trace!(line = self.line, op = %op, "execute");
            match self.step(op) {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(e) => return self.halt_with(e.in_line_number(Some(self.line))),
            }
        }
        Event::Running
    }

    fn halt(&mut self) -> Event {
        info!(line = self.line, depth = self.stack.len(), "program halted");
        self.state = State::Stopped;
        Event::Stopped
    }

    fn halt_with(&mut self, error: Error) -> Event {
        info!(%error, "program halted");
        self.state = State::Stopped;
        Event::Errors(Arc::new(vec![error]))
    }

    fn binary(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?)
    }

    fn step(&mut self, op: Opcode) -> Result<Option<Event>> {
        use Opcode::*;
        match op {
            Nop => {}
            Literal(n) => self.stack.push(Val::Integer(n))?,
            PushVector => {
                let vector = match self.vectors.get(self.cursor) {
                    Some(v) => DArray::try_from(v)?,
                    None => return Err(error!(VectorNotFound; "VECTOR TABLE EXHAUSTED")),
                };
                self.cursor += 1;
                self.stack.push(Val::Vector(vector))?
            }
            Push(name) => {
                let val = self.vars.fetch(&name)?;
                self.stack.push(val)?
            }
            Pop(name) => {
                let val = self.stack.pop()?;
                self.vars.store(&name, val)
            }
            JumpIf(addr) => {
                if let Val::Integer(n) = self.stack.pop()? {
                    if n > 0 {
                        self.pc = addr;
                    }
                } else {
                    return Err(error!(TypeMismatch; "EXPECTED INTEGER"));
                }
            }
            Jump(addr) => self.pc = addr,
            End => return Ok(Some(self.halt())),
            Read => {
                self.state = State::Input;
                return Ok(Some(Event::Input));
            }
            Write => {
                let val = self.stack.pop()?;
                return Ok(Some(Event::Print(format!("{}\n", val))));
            }
            Add => self.binary(Operation::sum)?,
            Sub => self.binary(Operation::subtract)?,
            Mul => self.binary(Operation::multiply)?,
            Div => self.binary(Operation::divide)?,
            Mod => self.binary(Operation::remainder)?,
            Eq => self.binary(Operation::equal)?,
            NotEq => self.binary(Operation::not_equal)?,
            Lt => self.binary(Operation::less)?,
            LtEq => self.binary(Operation::less_equal)?,
            Gt => self.binary(Operation::greater)?,
            GtEq => self.binary(Operation::greater_equal)?,
            VAdd => self.binary(Operation::vector_sum)?,
            VSub => self.binary(Operation::vector_subtract)?,
            VMul => self.binary(Operation::vector_multiply)?,
            VDiv => self.binary(Operation::vector_divide)?,
            VMod => self.binary(Operation::vector_remainder)?,
            VDot => self.binary(Operation::dot)?,
            VConcat => self.binary(Operation::concat)?,
            VLShift => self.binary(Operation::shift_left)?,
            VRShift => self.binary(Operation::shift_right)?,
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> (Runtime, String) {
        let mut r = Runtime::from_source(source);
        let mut out = String::new();
        loop {
            match r.execute(1000) {
                Event::Print(s) => out.push_str(&s),
                Event::Errors(errors) => {
                    for e in errors.iter() {
                        out.push_str(&format!("{}\n", e));
                    }
                }
                Event::Stopped => break,
                Event::Running | Event::Input => panic!("program did not finish"),
            }
        }
        (r, out)
    }

    #[test]
    fn test_sum() {
        let (r, out) = run("push 3\npush 4\n+\nwrite\nend\n");
        assert_eq!(out, "7\n");
        assert!(r.stack().is_empty());
    }

    #[test]
    fn test_error_keeps_state() {
        let (r, out) = run("push 2\npop a\npush 9\npush 0\n/\nwrite\n");
        assert_eq!(out, "DIVISION BY ZERO IN 5\n");
        assert!(r.stack().is_empty());
        assert_eq!(r.vars().get("a"), Some(&Val::Integer(2)));
    }

    #[test]
    fn test_input() {
        let mut r = Runtime::from_source("read\nread\n-\nwrite\n");
        assert!(matches!(r.execute(100), Event::Input));
        assert!(matches!(r.execute(100), Event::Input));
        r.enter("10");
        assert!(matches!(r.execute(100), Event::Input));
        r.enter(" 4 ");
        match r.execute(100) {
            Event::Print(s) => assert_eq!(s, "6\n"),
            e => panic!("{:?}", e),
        }
        assert!(matches!(r.execute(100), Event::Stopped));
    }

    #[test]
    fn test_interrupt() {
        let mut r = Runtime::from_source("jmp 1\n");
        assert!(matches!(r.execute(10), Event::Running));
        r.interrupt();
        match r.execute(10) {
            Event::Errors(errors) => {
                assert!(errors[0].is(crate::lang::ErrorCode::Break));
                assert_eq!(errors[0].line_number(), Some(1));
            }
            e => panic!("{:?}", e),
        }
        assert!(matches!(r.execute(10), Event::Stopped));
    }

    #[test]
    fn test_vector_cursor() {
        let (_, out) = run("push <<1,2>>\npush <<3,4>>\nvadd\nwrite\npush <<9>>\nwrite\n");
        assert_eq!(out, "<< 4, 6 >>\n<< 9 >>\n");
        let (_, out) = run("push <<1>>\nwrite\njmp 1\n");
        assert_eq!(out, "<< 1 >>\nVECTOR NOT FOUND IN 1; VECTOR TABLE EXHAUSTED\n");
    }

    #[test]
    fn test_unscanned_vector_line() {
        let r = Runtime::from_source("push 1\npush\u{a0}<<1>>\nwrite\n");
        let lines: Vec<_> = r.program().errors().iter().map(|e| e.line_number()).collect();
        assert_eq!(lines, vec![Some(2)]);
        let r = Runtime::from_source("push -1\nwrite\n");
        assert!(r.program().errors().is_empty());
    }

    #[test]
    fn test_wide_table_element() {
        let mut vectors = VectorTable::default();
        vectors.push(vec![1, u32::MAX]);
        let mut r = Runtime::new(&["push <<1, 2>>"], vectors);
        match r.execute(10) {
            Event::Errors(errors) => assert!(errors[0].is(lang::ErrorCode::FormatError)),
            e => panic!("{:?}", e),
        }
    }
}
