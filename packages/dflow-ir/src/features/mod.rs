//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

pub mod ast;
pub mod data_flow;
pub mod flow_graph;
pub mod labeling;
pub mod rendering;
