/// Diagram Rendering Feature
///
/// Writes graphs built through the sink port as Graphviz sources and, for
/// image formats, lays them out with the `dot` command.
///
/// ## Note
/// Image formats require the graphviz command-line tool. Failures here never
/// invalidate an analysis result.
pub mod error;
pub mod infrastructure;

pub use error::{RenderError, RenderResult};
pub use infrastructure::{DiagramKind, DotRenderer, RenderedDiagram};
