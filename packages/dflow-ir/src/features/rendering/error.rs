/// Diagram rendering errors
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Layout command `{command}` failed with {status}")]
    Tool { command: String, status: ExitStatus },

    #[error("Layout command `{command}` could not be started: {source}")]
    ToolMissing {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
