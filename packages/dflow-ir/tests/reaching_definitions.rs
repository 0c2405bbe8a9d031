//! Reaching definitions over whole programs
//!
//! Covers:
//! - Branch join is a union (both arms reach past the `if`)
//! - Loop header sees the back edge
//! - Gen/kill soundness and fixpoint idempotence on random programs

mod common;

use common::*;
use dflow_ir::features::ast::StmtKind;
use dflow_ir::features::data_flow::{defined_variables, ReachingDefinitions};
use dflow_ir::{assign_labels, emit_rd, rdcalc, AnalysisConfig, AnalysisPipeline, Block};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn analyze(program: Block) -> dflow_ir::AnalysisResult {
    AnalysisPipeline::new(AnalysisConfig::default())
        .unwrap()
        .run(program)
        .unwrap()
}

// ============================================================================
// Example programs
// ============================================================================

#[test]
fn test_branch_join_reaches_use() {
    let result = analyze(branch_join());
    let points = result.program_points();
    let [x1, _if, y2, y3, zy] = [points[0], points[1], points[2], points[3], points[4]];

    let entry = &zy.meta.entry;
    assert_reaching(entry, "x", &[x1.label()]);
    assert_reaching(entry, "y", &[y2.label(), y3.label()]);
    assert_reaching(entry, "z", &[]);
    assert_reaching(&zy.meta.exit, "z", &[zy.label()]);
}

#[test]
fn test_branch_join_listing() {
    let result = analyze(branch_join());

    assert_eq!(
        result.emit_rd(),
        "{} [x = 1] -- 1 {x: {1}}\n\
         {x: {1}} [if x > 0] -- 5 {x: {1}, y: {10, 14}}\n\
         \x20 {x: {1}} [y = 2] -- 10 {x: {1}, y: {10}}\n\
         \x20 {x: {1}} [y = 3] -- 14 {x: {1}, y: {14}}\n\
         {x: {1}, y: {10, 14}} [z = y] -- 18 {x: {1}, y: {10, 14}, z: {18}}\n"
    );
}

#[test]
fn test_branch_join_program_text() {
    let result = analyze(branch_join());

    assert_eq!(
        result.program_text(),
        "[x = 1] -- 1\n\
         if [x > 0] -- 6 then\n\
         \x20 [y = 2] -- 10\n\
         else\n\
         \x20 [y = 3] -- 14\n\
         fi\n\
         [z = y] -- 18\n"
    );
}

#[test]
fn test_json_program_matches_builder() {
    let pipeline = AnalysisPipeline::new(AnalysisConfig::default()).unwrap();

    let from_json = pipeline.run_json(BRANCH_JOIN_JSON).unwrap();
    let from_builder = analyze(branch_join());

    assert_eq!(from_json.emit_rd(), from_builder.emit_rd());
}

#[test]
fn test_loop_header_holds_both_definitions() {
    let result = analyze(counting_loop());
    let points = result.program_points();
    let [init, header, step] = [points[0], points[1], points[2]];

    assert_reaching(&header.meta.entry, "x", &[init.label(), step.label()]);
    assert_reaching(&step.meta.entry, "x", &[init.label(), step.label()]);
    assert_reaching(&step.meta.exit, "x", &[step.label()]);
    assert_eq!(
        result.emit_rd(),
        "{} [x = 0] -- 1 {x: {1}}\n\
         {x: {1, 10}} [while x < 10] -- 5 {x: {1, 10}}\n\
         \x20 {x: {1, 10}} [x = x + 1] -- 10 {x: {10}}\n"
    );
}

#[test]
fn test_loop_inside_branch() {
    let result = analyze(loop_in_branch());
    let points = result.program_points();
    // i = 0, s = 0, if, while, s = s + i, i = i + 1, skip, s
    let [i0, s0, _if, header, s_step, i_step, _skip, use_s] = [
        points[0], points[1], points[2], points[3], points[4], points[5], points[6], points[7],
    ];

    assert_reaching(&header.meta.entry, "s", &[s0.label(), s_step.label()]);
    assert_reaching(&header.meta.entry, "i", &[i0.label(), i_step.label()]);
    assert_reaching(&use_s.meta.entry, "s", &[s0.label(), s_step.label()]);
    assert_reaching(&use_s.meta.entry, "i", &[i0.label(), i_step.label()]);
}

#[test]
fn test_rerun_reports_single_sweep() {
    let mut result = analyze(loop_in_branch());
    let before = result.emit_rd();

    let report = ReachingDefinitions::default()
        .rdcalc(&mut result.program)
        .unwrap();

    assert_eq!(report.sweeps, 1);
    assert_eq!(result.emit_rd(), before);
}

// ============================================================================
// Properties over random programs
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fixpoint_is_idempotent(program in arb_program()) {
        let mut program = program;
        assign_labels(&mut program);
        rdcalc(&mut program, 1_000).unwrap();
        let listing = emit_rd(&program, 2);

        let report = rdcalc(&mut program, 1_000).unwrap();

        prop_assert_eq!(report.sweeps, 1);
        prop_assert_eq!(emit_rd(&program, 2), listing);
    }

    #[test]
    fn prop_assignment_kills_other_definitions(program in arb_program()) {
        let mut program = program;
        assign_labels(&mut program);
        rdcalc(&mut program, 1_000).unwrap();

        for stmt in program_points(&program) {
            if let StmtKind::Expression { expr } = &stmt.kind {
                for var in defined_variables(expr) {
                    prop_assert_eq!(labels(&stmt.meta.exit, &var), vec![stmt.label().value()]);
                }
            }
        }
    }

    #[test]
    fn prop_reaching_labels_name_defining_statements(program in arb_program()) {
        let mut program = program;
        assign_labels(&mut program);
        rdcalc(&mut program, 1_000).unwrap();

        // Every reaching label belongs to a statement or a condition statement
        let points = program_points(&program);
        for stmt in &points {
            for def in stmt.meta.entry.iter() {
                prop_assert!(points.iter().any(|p| p.label() == def.label)
                    || conditions_define(&program, def.label.value()));
            }
        }
    }
}

/// True when a condition statement of some `if`/`while` has `label`
fn conditions_define(block: &Block, label: u32) -> bool {
    block.statements.iter().any(|stmt| match &stmt.kind {
        StmtKind::Skip | StmtKind::Expression { .. } => false,
        StmtKind::If(s) => {
            s.condition.statements.iter().any(|c| c.label().value() == label)
                || conditions_define(&s.then_block, label)
                || conditions_define(&s.else_block, label)
        }
        StmtKind::While(s) => {
            s.condition.statements.iter().any(|c| c.label().value() == label)
                || conditions_define(&s.body, label)
        }
    })
}
