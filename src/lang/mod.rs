/*!
# Rust Language Module

This Rust module provides lexical analysis of the VSTACK language.

*/

#[macro_use]
mod error;
mod keyword;
mod lex;
mod lexeme;
mod source;
mod symbol;
mod table;
mod translate;

pub use error::Error;
pub use error::ErrorCode;
pub use keyword::lookup as keyword;
pub use lex::lex;
pub use lex::Scan;
pub use lexeme::Lexeme;
pub use lexeme::LexemeClass;
pub use source::program_lines;
pub use symbol::{Category, Symbol, Transliterator};
pub use table::{ConstantTable, NameTable, VectorTable};
pub use translate::program_from_lexemes;

/// 1-based source line, `None` when not tied to a line.
pub type LineNumber = Option<usize>;
