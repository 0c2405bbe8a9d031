/// Graphviz renderer
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::config::{OutputFormat, RenderConfig};
use crate::features::flow_graph::PetgraphSink;
use crate::features::rendering::error::{RenderError, RenderResult};

/// Layout command for image formats
pub const DOT_COMMAND: &str = "dot";

/// Which diagram a file holds; used as the file name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Cfg,
    Ast,
    /// AST annotated with labels
    AnnotatedAst,
}

impl DiagramKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            DiagramKind::Cfg => "cfg",
            DiagramKind::Ast => "ast",
            DiagramKind::AnnotatedAst => "dast",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Files produced for one diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub kind: DiagramKind,
    pub dot: PathBuf,
    /// Laid-out image, absent for the `dot` format
    pub image: Option<PathBuf>,
}

/// Writes `<prefix>-<kind>.dot` and runs
/// `dot -T<format> -o <prefix>-<kind>.<format> <prefix>-<kind>.dot`
#[derive(Debug, Clone)]
pub struct DotRenderer {
    prefix: String,
    format: OutputFormat,
    command: String,
}

impl DotRenderer {
    pub fn new(prefix: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            prefix: prefix.into(),
            format,
            command: DOT_COMMAND.to_string(),
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.prefix.clone(), config.format)
    }

    /// Use another layout command (same arguments as `dot`)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn dot_path(&self, kind: DiagramKind) -> PathBuf {
        PathBuf::from(format!("{}-{}.dot", self.prefix, kind))
    }

    pub fn image_path(&self, kind: DiagramKind) -> PathBuf {
        PathBuf::from(format!("{}-{}.{}", self.prefix, kind, self.format))
    }

    /// Write the graph and lay it out if the format asks for it
    pub fn render(&self, kind: DiagramKind, graph: &PetgraphSink) -> RenderResult<RenderedDiagram> {
        let dot = self.dot_path(kind);
        fs::write(&dot, graph.to_dot()).map_err(|source| RenderError::Io {
            path: dot.clone(),
            source,
        })?;
        debug!("wrote {}", dot.display());

        let image = if self.format.needs_layout() {
            let image = self.image_path(kind);
            self.layout(&dot, &image)?;
            Some(image)
        } else {
            None
        };

        Ok(RenderedDiagram { kind, dot, image })
    }

    fn layout(&self, dot: &Path, image: &Path) -> RenderResult<()> {
        let mut cmd = Command::new(&self.command);
        cmd.arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(image)
            .arg(dot);
        let command_line = format!(
            "{} -T{} -o {} {}",
            self.command,
            self.format,
            image.display(),
            dot.display()
        );

        let status = cmd.status().map_err(|source| match source.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => RenderError::ToolMissing {
                command: command_line.clone(),
                source,
            },
            _ => RenderError::Io {
                path: image.to_path_buf(),
                source,
            },
        })?;

        if !status.success() {
            return Err(RenderError::Tool {
                command: command_line,
                status,
            });
        }
        debug!("laid out {}", image.display());
        Ok(())
    }
}
