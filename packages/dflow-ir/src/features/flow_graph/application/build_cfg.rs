use tracing::debug;

use crate::errors::Result;
use crate::features::ast::domain::Block;
use crate::features::flow_graph::domain::{FlowEdge, ProgramCfg};
use crate::features::flow_graph::infrastructure::{cfg_prep, cfg_stitch};
use crate::features::flow_graph::ports::GraphSink;
use crate::shared::constants::diagram::{PROGRAM_ENTRY, PROGRAM_EXIT};

/// Builds the CFG of a whole (labeled) program between a `[[PROGRAM]]` and a
/// `[[PROGRAM END]]` node
pub struct BuildCfgUseCase<'s, S: GraphSink> {
    sink: &'s mut S,
}

impl<'s, S: GraphSink> BuildCfgUseCase<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink }
    }

    pub fn execute(self, program: &mut Block) -> Result<ProgramCfg> {
        let entry = self.sink.new_node(PROGRAM_ENTRY);
        let exit = self.sink.new_node(PROGRAM_EXIT);

        cfg_prep(program, self.sink);
        let out = cfg_stitch(program, self.sink, FlowEdge::plain(entry))?;
        self.sink.new_edge(out.from, exit, out.label);

        debug!("cfg built: entry={} exit={}", entry, exit);
        Ok(ProgramCfg { entry, exit })
    }
}
