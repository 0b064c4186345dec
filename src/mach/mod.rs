/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for VSTACK.

*/

pub type Address = usize;

mod compile;
mod darray;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use compile::compile;
pub use darray::DArray;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
