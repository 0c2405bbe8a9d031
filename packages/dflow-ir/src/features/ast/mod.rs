//! Abstract syntax tree of the analyzed language
//!
//! - domain/         - Node types (expressions, statements, blocks)
//! - infrastructure/ - Program text, AST diagrams, structural validation

pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::{paint_ast, validate_program, ProgramText};
