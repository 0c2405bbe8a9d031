//! Control flow graph construction
//!
//! - domain/         - Program CFG endpoints, dangling edges
//! - ports/          - Graph sink capability (`GraphSink`)
//! - infrastructure/ - CFG builder (prep + stitch), petgraph-backed sink
//! - application/    - Whole-program CFG use case

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::BuildCfgUseCase;
pub use domain::{FlowEdge, ProgramCfg};
pub use infrastructure::{cfg_prep, cfg_stitch, PetgraphSink};
pub use ports::{EdgeHandle, GraphSink, NodeHandle};
