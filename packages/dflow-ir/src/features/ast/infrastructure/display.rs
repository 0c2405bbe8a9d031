/*
 * Program Text
 *
 * Human-readable rendering of the tree:
 * - Expressions print infix, nested operators parenthesized
 * - Statements print as `[text] -- label`
 * - `if c then ... else ... fi`, `while c do ... od`, indented by depth
 */

use std::fmt;

use crate::features::ast::domain::{Block, Expr, Statement, StmtKind};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(id) => f.write_str(&id.name),
            Expr::Int(lit) => write!(f, "{}", lit.value),
            Expr::Float(lit) => write!(f, "{:?}", lit.value),
            Expr::Bool(lit) => write!(f, "{}", lit.value),
            Expr::Assignment(a) => write!(f, "{} = {}", a.target.name, a.value),
            Expr::Arithmetic(e) => {
                write_operand(f, &e.left)?;
                write!(f, " {} ", e.op.symbol())?;
                write_operand(f, &e.right)
            }
            Expr::Logical(e) => {
                write_operand(f, &e.left)?;
                write!(f, " {} ", e.op.symbol())?;
                write_operand(f, &e.right)
            }
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr) -> fmt::Result {
    match operand {
        Expr::Assignment(_) | Expr::Arithmetic(_) | Expr::Logical(_) => write!(f, "({})", operand),
        _ => write!(f, "{}", operand),
    }
}

/// Condition block as `x > 0` (several condition statements joined by `; `)
pub fn condition_text(condition: &Block) -> String {
    condition
        .statements
        .iter()
        .map(statement_text)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Statement text without label: `x = 1`, `skip`, `if x > 0`, `while x < 10`
pub fn statement_text(stmt: &Statement) -> String {
    match &stmt.kind {
        StmtKind::Skip => "skip".to_string(),
        StmtKind::Expression { expr } => expr.to_string(),
        StmtKind::If(s) => format!("if {}", condition_text(&s.condition)),
        StmtKind::While(s) => format!("while {}", condition_text(&s.condition)),
    }
}

/// Program point text: `[x = 1] -- 2`
pub fn point_text(stmt: &Statement) -> String {
    format!("[{}] -- {}", statement_text(stmt), stmt.label())
}

/// Indented program listing
pub struct ProgramText<'a> {
    program: &'a Block,
    indent: usize,
}

impl<'a> ProgramText<'a> {
    pub fn new(program: &'a Block, indent: usize) -> Self {
        Self { program, indent }
    }

    fn pad(&self, stmt: &Statement) -> String {
        " ".repeat(stmt.meta.depth as usize * self.indent)
    }

    fn write_block(&self, f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
        for stmt in &block.statements {
            self.write_statement(f, stmt)?;
        }
        Ok(())
    }

    fn write_condition(&self, f: &mut fmt::Formatter<'_>, condition: &Block) -> fmt::Result {
        let points: Vec<String> = condition.statements.iter().map(point_text).collect();
        f.write_str(&points.join(" "))
    }

    fn write_statement(&self, f: &mut fmt::Formatter<'_>, stmt: &Statement) -> fmt::Result {
        let pad = self.pad(stmt);
        match &stmt.kind {
            StmtKind::Skip | StmtKind::Expression { .. } => {
                writeln!(f, "{}{}", pad, point_text(stmt))
            }
            StmtKind::If(s) => {
                write!(f, "{}if ", pad)?;
                self.write_condition(f, &s.condition)?;
                writeln!(f, " then")?;
                self.write_block(f, &s.then_block)?;
                writeln!(f, "{}else", pad)?;
                self.write_block(f, &s.else_block)?;
                writeln!(f, "{}fi", pad)
            }
            StmtKind::While(s) => {
                write!(f, "{}while ", pad)?;
                self.write_condition(f, &s.condition)?;
                writeln!(f, " do")?;
                self.write_block(f, &s.body)?;
                writeln!(f, "{}od", pad)
            }
        }
    }
}

impl fmt::Display for ProgramText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_block(f, self.program)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ProgramText::new(self, 2).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ast::domain::{ArithOp, LogicalOp};

    #[test]
    fn test_nested_operands_parenthesized() {
        let expr = Expr::arith(
            Expr::arith(Expr::ident("a"), ArithOp::Add, Expr::ident("b")),
            ArithOp::Mul,
            Expr::int(2),
        );
        assert_eq!(expr.to_string(), "(a + b) * 2");
    }

    #[test]
    fn test_statement_text() {
        let stmt = Statement::while_loop(
            Expr::logical(Expr::ident("x"), LogicalOp::Lt, Expr::int(10)),
            Block::empty(),
        );
        assert_eq!(statement_text(&stmt), "while x < 10");
        assert_eq!(statement_text(&Statement::skip()), "skip");
        assert_eq!(
            statement_text(&Statement::assign("f", Expr::float(1.5))),
            "f = 1.5"
        );
    }

    #[test]
    fn test_unlabeled_listing() {
        let program = Block::new(vec![
            Statement::assign("x", Expr::int(1)),
            Statement::if_else(
                Expr::boolean(true),
                Block::new(vec![Statement::skip()]),
                Block::empty(),
            ),
        ]);

        assert_eq!(
            program.to_string(),
            "[x = 1] -- 0\nif [true] -- 0 then\n[skip] -- 0\nelse\nfi\n"
        );
    }
}
