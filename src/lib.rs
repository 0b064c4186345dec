//! # VSTACK
//!
//! A small stack machine language with integers and integer vectors.
//!
//! Run a program with `vstack program.vs`. The scanner turns the source
//! into lexemes and side tables, the machine compiles one opcode per
//! line and runs it against an operand stack.
//! ```text
//! $ vstack sum.vs
//! 7
//! STACK
//! VARIABLES
//! ```
//!
//! The library can be driven directly as well.
//! ```
//! use vstack::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::from_source("push 3\npush 4\n+\nwrite\nend\n");
//! match runtime.execute(100) {
//!     Event::Print(s) => assert_eq!(s, "7\n"),
//!     _ => unreachable!(),
//! }
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
