/*
 * CFG Builder
 *
 * Two phases over the labeled tree:
 * - prep:   one CFG node per statement (condition statements share the
 *           node of their `if`/`while`)
 * - stitch: wire edges following the structured control flow
 *
 * Edge shapes:
 * - Sequential: pred -> stmt
 * - If:         pred -> cond, cond -true-> then..., cond -false-> else...,
 *               both branch exits -> fresh merge node (never elided)
 * - While:      pred -> cond, cond -true-> body..., body exit -> cond,
 *               cond -false-> fresh loop exit node
 */

use tracing::trace;

use crate::errors::{DflowError, Result};
use crate::features::ast::domain::{Block, Statement, StmtKind};
use crate::features::ast::infrastructure::point_text;
use crate::features::flow_graph::domain::FlowEdge;
use crate::features::flow_graph::ports::{GraphSink, NodeHandle};
use crate::shared::constants::diagram::{FALSE_EDGE, MERGE, TRUE_EDGE};

/// Create the CFG nodes of every statement in `block`
pub fn cfg_prep<S: GraphSink>(block: &mut Block, sink: &mut S) {
    for stmt in &mut block.statements {
        prep_statement(stmt, sink);
    }
}

fn prep_statement<S: GraphSink>(stmt: &mut Statement, sink: &mut S) {
    let node = sink.new_node(&point_text(stmt));
    trace!("cfg node {} for statement {}", node, stmt.label());
    stmt.cfg_node = Some(node);

    match &mut stmt.kind {
        StmtKind::Skip | StmtKind::Expression { .. } => {}
        StmtKind::If(s) => {
            share_node(&mut s.condition, node);
            cfg_prep(&mut s.then_block, sink);
            cfg_prep(&mut s.else_block, sink);
        }
        StmtKind::While(s) => {
            share_node(&mut s.condition, node);
            cfg_prep(&mut s.body, sink);
        }
    }
}

/// Condition statements are evaluated by the branch node itself
fn share_node(condition: &mut Block, node: NodeHandle) {
    for stmt in &mut condition.statements {
        stmt.cfg_node = Some(node);
    }
}

/// Wire `block` after `incoming`; returns where control leaves the block
///
/// An empty block returns `incoming` unchanged.
pub fn cfg_stitch<S: GraphSink>(
    block: &Block,
    sink: &mut S,
    incoming: FlowEdge,
) -> Result<FlowEdge> {
    let mut edge = incoming;
    for stmt in &block.statements {
        edge = stitch_statement(stmt, sink, edge)?;
    }
    Ok(edge)
}

fn stitch_statement<S: GraphSink>(
    stmt: &Statement,
    sink: &mut S,
    incoming: FlowEdge,
) -> Result<FlowEdge> {
    let node = stmt.cfg_node.ok_or(DflowError::CfgNotPrepared {
        label: stmt.label(),
    })?;
    sink.new_edge(incoming.from, node, incoming.label);

    match &stmt.kind {
        StmtKind::Skip | StmtKind::Expression { .. } => Ok(FlowEdge::plain(node)),
        StmtKind::If(s) => {
            let then_out = cfg_stitch(&s.then_block, sink, FlowEdge::labeled(node, TRUE_EDGE))?;
            let else_out = cfg_stitch(&s.else_block, sink, FlowEdge::labeled(node, FALSE_EDGE))?;

            let merge = sink.new_node(MERGE);
            sink.new_edge(then_out.from, merge, then_out.label);
            sink.new_edge(else_out.from, merge, else_out.label);
            Ok(FlowEdge::plain(merge))
        }
        StmtKind::While(s) => {
            let body_out = cfg_stitch(&s.body, sink, FlowEdge::labeled(node, TRUE_EDGE))?;
            sink.new_edge(body_out.from, node, body_out.label);

            let exit = sink.new_node(MERGE);
            sink.new_edge(node, exit, FALSE_EDGE);
            Ok(FlowEdge::plain(exit))
        }
    }
}
