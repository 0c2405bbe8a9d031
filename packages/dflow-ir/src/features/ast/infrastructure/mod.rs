//! AST infrastructure

pub mod display;
pub mod painter;
pub mod validate;

pub use display::{condition_text, point_text, statement_text, ProgramText};
pub use painter::paint_ast;
pub use validate::validate_program;
