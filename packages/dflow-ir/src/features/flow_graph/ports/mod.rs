mod graph_sink;

pub use graph_sink::{EdgeHandle, GraphSink, NodeHandle};
