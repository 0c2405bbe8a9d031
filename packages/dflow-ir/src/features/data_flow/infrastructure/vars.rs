/*
 * Variable-use collector
 *
 * getvs:       variables a node mentions (reads and writes alike)
 * gather_vars: same set, memoized in the node's meta on first request
 *
 * `skip` mentions only the sentinel variable, so it joins set algebra
 * without ever matching a real name.
 *
 * Gen/kill for a statement:
 * - expression: gen = {(t, label)} and kill = {t} for every assignment target t
 * - skip:       kill = getvs(skip), gen = {}
 * - if/while:   handled structurally by the engine
 */

use crate::features::ast::domain::{Block, Expr, NodeMeta, Statement, StmtKind};
use crate::shared::constants::variables::BOGUS_VARIABLE;
use crate::shared::models::{Definition, VarSet};

/// Node that can report the variables it mentions
pub trait VarUse {
    fn collect_vars(&self, out: &mut VarSet);
    fn node_meta(&self) -> &NodeMeta;
}

impl VarUse for Expr {
    fn collect_vars(&self, out: &mut VarSet) {
        match self {
            Expr::Identifier(id) => {
                out.insert(id.name.clone());
            }
            Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) => {}
            Expr::Assignment(a) => {
                out.insert(a.target.name.clone());
                a.value.collect_vars(out);
            }
            Expr::Arithmetic(e) => {
                e.left.collect_vars(out);
                e.right.collect_vars(out);
            }
            Expr::Logical(e) => {
                e.left.collect_vars(out);
                e.right.collect_vars(out);
            }
        }
    }

    fn node_meta(&self) -> &NodeMeta {
        self.meta()
    }
}

impl VarUse for Statement {
    fn collect_vars(&self, out: &mut VarSet) {
        match &self.kind {
            StmtKind::Skip => {
                out.insert(BOGUS_VARIABLE.to_string());
            }
            StmtKind::Expression { expr } => expr.collect_vars(out),
            StmtKind::If(s) => {
                s.condition.collect_vars(out);
                s.then_block.collect_vars(out);
                s.else_block.collect_vars(out);
            }
            StmtKind::While(s) => {
                s.condition.collect_vars(out);
                s.body.collect_vars(out);
            }
        }
    }

    fn node_meta(&self) -> &NodeMeta {
        &self.meta
    }
}

impl VarUse for Block {
    fn collect_vars(&self, out: &mut VarSet) {
        for stmt in &self.statements {
            stmt.collect_vars(out);
        }
    }

    fn node_meta(&self) -> &NodeMeta {
        &self.meta
    }
}

/// Variables mentioned by `node`, recomputed on every call
pub fn getvs<N: VarUse + ?Sized>(node: &N) -> VarSet {
    let mut vars = VarSet::new();
    node.collect_vars(&mut vars);
    vars
}

/// Variables mentioned by `node`, cached in its meta after the first call
pub fn gather_vars<N: VarUse + ?Sized>(node: &N) -> &VarSet {
    node.node_meta().vars.get_or_init(|| getvs(node))
}

/// Every assignment target inside `expr`, chained assignments included
pub fn defined_variables(expr: &Expr) -> VarSet {
    fn walk(expr: &Expr, out: &mut VarSet) {
        match expr {
            Expr::Identifier(_) | Expr::Int(_) | Expr::Float(_) | Expr::Bool(_) => {}
            Expr::Assignment(a) => {
                out.insert(a.target.name.clone());
                walk(&a.value, out);
            }
            Expr::Arithmetic(e) => {
                walk(&e.left, out);
                walk(&e.right, out);
            }
            Expr::Logical(e) => {
                walk(&e.left, out);
                walk(&e.right, out);
            }
        }
    }

    let mut out = VarSet::new();
    walk(expr, &mut out);
    out
}

/// Definitions created by a simple statement, at its own label
pub fn generated(stmt: &Statement) -> Vec<Definition> {
    match &stmt.kind {
        StmtKind::Expression { expr } => defined_variables(expr)
            .into_iter()
            .map(|v| Definition::new(v, stmt.label()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Variables whose earlier definitions a simple statement kills
pub fn killed(stmt: &Statement) -> VarSet {
    match &stmt.kind {
        StmtKind::Skip => gather_vars(stmt).clone(),
        StmtKind::Expression { expr } => defined_variables(expr),
        _ => VarSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ast::domain::{ArithOp, LogicalOp};
    use crate::features::labeling::assign_labels;

    fn set(names: &[&str]) -> VarSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expression_vars() {
        let expr = Expr::assign(
            "x",
            Expr::arith(Expr::ident("y"), ArithOp::Mul, Expr::float(2.0)),
        );
        assert_eq!(getvs(&expr), set(&["x", "y"]));
        assert!(getvs(&Expr::int(4)).is_empty());
    }

    #[test]
    fn test_skip_mentions_only_the_sentinel() {
        let skip = Statement::skip();
        assert_eq!(getvs(&skip), set(&[BOGUS_VARIABLE]));
    }

    #[test]
    fn test_compound_vars_are_unions_of_children() {
        let program = Block::new(vec![
            Statement::if_else(
                Expr::logical(Expr::ident("a"), LogicalOp::Lt, Expr::ident("b")),
                Block::new(vec![Statement::assign("c", Expr::int(1))]),
                Block::new(vec![Statement::skip()]),
            ),
            Statement::while_loop(Expr::ident("d"), Block::empty()),
        ]);

        assert_eq!(getvs(&program), set(&["a", "b", "c", "d", BOGUS_VARIABLE]));
    }

    #[test]
    fn test_gather_vars_is_memoized() {
        let stmt = Statement::assign("x", Expr::ident("y"));
        let first = gather_vars(&stmt) as *const VarSet;
        let second = gather_vars(&stmt) as *const VarSet;

        assert_eq!(first, second);
        assert_eq!(gather_vars(&stmt), &set(&["x", "y"]));
    }

    #[test]
    fn test_chained_assignment_defines_every_target() {
        let expr = Expr::assign("x", Expr::assign("y", Expr::int(1)));
        assert_eq!(defined_variables(&expr), set(&["x", "y"]));
        assert!(defined_variables(&Expr::ident("x")).is_empty());
    }

    #[test]
    fn test_gen_kill_of_simple_statements() {
        let mut program = Block::new(vec![
            Statement::assign("x", Expr::int(1)),
            Statement::skip(),
            Statement::expr(Expr::ident("x")),
        ]);
        assign_labels(&mut program);
        let [assign, skip, read] = [
            &program.statements[0],
            &program.statements[1],
            &program.statements[2],
        ];

        assert_eq!(generated(assign), vec![Definition::new("x", assign.label())]);
        assert_eq!(killed(assign), set(&["x"]));
        assert!(generated(skip).is_empty());
        assert_eq!(killed(skip), set(&[BOGUS_VARIABLE]));
        assert!(generated(read).is_empty());
        assert!(killed(read).is_empty());
    }
}
