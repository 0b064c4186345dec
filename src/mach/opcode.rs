use super::Address;
use std::rc::Rc;

/// ## Virtual machine instruction set
///
/// The VSTACK virtual machine has no registers.
/// Every operation is performed on the stack.
///
/// Each program line compiles to exactly one opcode so an
/// `Address` is also the 0-based line index.
///
/// For example: `push 3`, `push x`, `-`, `pop r` compiles to
/// `[Literal(3), Push(x), Sub, Pop(r)]`

#[derive(Clone, PartialEq)]
pub enum Opcode {
    /// Blank or comment-only line.
    Nop,

    // *** Stack manipulation
    /// Push literal integer on to the stack.
    Literal(i32),
    /// Push the next vector literal from the vector table.
    PushVector,
    /// Push stack value of named variable. Fails if never stored.
    Push(Rc<str>),
    /// Pop stack value to named variable.
    Pop(Rc<str>),

    // *** Branch control
    /// Pop integer and branch to Address if greater than zero.
    JumpIf(Address),
    /// Unconditional branch to Address.
    Jump(Address),

    // *** Statements
    End,
    Read,
    Write,

    // *** Integer operations
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // *** Vector operations
    VAdd,
    VSub,
    VMul,
    VDiv,
    VMod,
    VDot,
    VConcat,
    VLShift,
    VRShift,
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Nop => write!(f, "NOP"),

            Literal(n) => write!(f, "LITERAL({})", n),
            PushVector => write!(f, "PUSHVECTOR"),
            Push(s) => write!(f, "PUSH({})", s),
            Pop(s) => write!(f, "POP({})", s),

            JumpIf(a) => write!(f, "JUMPIF({})", a),
            Jump(a) => write!(f, "JUMP({})", a),

            End => write!(f, "END"),
            Read => write!(f, "READ"),
            Write => write!(f, "WRITE"),

            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            Mod => write!(f, "MOD"),
            Eq => write!(f, "EQ"),
            NotEq => write!(f, "NOTEQ"),
            Lt => write!(f, "LT"),
            LtEq => write!(f, "LTEQ"),
            Gt => write!(f, "GT"),
            GtEq => write!(f, "GTEQ"),

            VAdd => write!(f, "VADD"),
            VSub => write!(f, "VSUB"),
            VMul => write!(f, "VMUL"),
            VDiv => write!(f, "VDIV"),
            VMod => write!(f, "VMOD"),
            VDot => write!(f, "VDOT"),
            VConcat => write!(f, "VCONCAT"),
            VLShift => write!(f, "VLSHIFT"),
            VRShift => write!(f, "VRSHIFT"),
        }
    }
}
