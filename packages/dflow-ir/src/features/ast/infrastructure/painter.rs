//! AST diagrams
//!
//! Draws the tree onto a `GraphSink`: one node per AST node below a
//! `[[PROGRAM]]` root. Structured statements get grouping nodes for their
//! test, branches and body. When `annotated` is set every node also shows
//! its label.

use crate::features::ast::domain::{Block, Expr, Statement, StmtKind};
use crate::features::flow_graph::ports::{GraphSink, NodeHandle};
use crate::shared::constants::diagram::{
    BODY_GROUP, ELSE_GROUP, IF_GROUP, PROGRAM_ENTRY, TEST_GROUP,
};
use crate::shared::models::Label;

/// Paint `program`, returning the root node
pub fn paint_ast<S: GraphSink>(program: &Block, sink: &mut S, annotated: bool) -> NodeHandle {
    let root = sink.new_node(PROGRAM_ENTRY);
    let mut painter = AstPainter { sink, annotated };
    painter.paint_block(program, root);
    root
}

struct AstPainter<'s, S: GraphSink> {
    sink: &'s mut S,
    annotated: bool,
}

impl<S: GraphSink> AstPainter<'_, S> {
    fn child(&mut self, parent: NodeHandle, text: &str, label: Label) -> NodeHandle {
        let node = if self.annotated {
            self.sink.new_node(&format!("{} {}", text, label))
        } else {
            self.sink.new_node(text)
        };
        self.sink.new_edge(parent, node, "");
        node
    }

    fn group(&mut self, parent: NodeHandle, text: &str) -> NodeHandle {
        let node = self.sink.new_node(text);
        self.sink.new_edge(parent, node, "");
        node
    }

    fn paint_block(&mut self, block: &Block, parent: NodeHandle) {
        for stmt in &block.statements {
            self.paint_statement(stmt, parent);
        }
    }

    fn paint_statement(&mut self, stmt: &Statement, parent: NodeHandle) {
        match &stmt.kind {
            StmtKind::Skip => {
                self.child(parent, "skip", stmt.label());
            }
            StmtKind::Expression { expr } => self.paint_expr(expr, parent),
            StmtKind::If(s) => {
                let node = self.child(parent, "if", stmt.label());
                let test = self.group(node, TEST_GROUP);
                self.paint_block(&s.condition, test);
                let then_group = self.group(node, IF_GROUP);
                self.paint_block(&s.then_block, then_group);
                let else_group = self.group(node, ELSE_GROUP);
                self.paint_block(&s.else_block, else_group);
            }
            StmtKind::While(s) => {
                let node = self.child(parent, "while", stmt.label());
                let test = self.group(node, TEST_GROUP);
                self.paint_block(&s.condition, test);
                let body = self.group(node, BODY_GROUP);
                self.paint_block(&s.body, body);
            }
        }
    }

    fn paint_expr(&mut self, expr: &Expr, parent: NodeHandle) {
        let label = expr.meta().label;
        match expr {
            Expr::Identifier(id) => {
                self.child(parent, &id.name, label);
            }
            Expr::Int(lit) => {
                self.child(parent, &lit.value.to_string(), label);
            }
            Expr::Float(lit) => {
                self.child(parent, &format!("{:?}", lit.value), label);
            }
            Expr::Bool(lit) => {
                self.child(parent, &lit.value.to_string(), label);
            }
            Expr::Assignment(a) => {
                let node = self.child(parent, "=", label);
                self.child(node, &a.target.name, a.target.meta.label);
                self.paint_expr(&a.value, node);
            }
            Expr::Arithmetic(e) => {
                let node = self.child(parent, e.op.symbol(), label);
                self.paint_expr(&e.left, node);
                self.paint_expr(&e.right, node);
            }
            Expr::Logical(e) => {
                let node = self.child(parent, e.op.symbol(), label);
                self.paint_expr(&e.left, node);
                self.paint_expr(&e.right, node);
            }
        }
    }
}
