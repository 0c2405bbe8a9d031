//! Flow Graph infrastructure

pub mod cfg_builder;
pub mod petgraph_sink;

pub use cfg_builder::{cfg_prep, cfg_stitch};
pub use petgraph_sink::PetgraphSink;
