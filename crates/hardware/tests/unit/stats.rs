//! # Execution Statistics Tests

use ls8_core::core::units::alu::AluOp;
use ls8_core::isa::Instruction;
use ls8_core::stats::SimStats;

use crate::common::{ProgramBuilder, TestContext};

#[test]
fn test_default_stats_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.inst_alu, 0);
    assert_eq!(stats.inst_load, 0);
    assert_eq!(stats.inst_stack, 0);
    assert_eq!(stats.inst_control, 0);
    assert_eq!(stats.inst_io, 0);
    assert_eq!(stats.inst_other, 0);
}

#[test]
fn test_record_categorizes_instructions() {
    let mut stats = SimStats::new();
    for inst in [
        Instruction::Nop,
        Instruction::Hlt,
        Instruction::Ret,
        Instruction::Ldi { reg: 0, imm: 1 },
        Instruction::Prn { reg: 0 },
        Instruction::Push { reg: 0 },
        Instruction::Pop { reg: 0 },
        Instruction::Call { reg: 0 },
        Instruction::Jmp { reg: 0 },
        Instruction::Jeq { reg: 0 },
        Instruction::Jne { reg: 0 },
        Instruction::Alu {
            op: AluOp::Add,
            reg_a: 0,
            reg_b: 1,
        },
        Instruction::Alu {
            op: AluOp::Cmp,
            reg_a: 0,
            reg_b: 1,
        },
    ] {
        stats.record(&inst);
    }

    assert_eq!(stats.cycles, 13);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_stack, 2);
    assert_eq!(stats.inst_control, 5);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_other, 2);
}

#[test]
fn test_run_counts_every_executed_instruction() {
    let program = ProgramBuilder::new()
        .ldi(0, 8)
        .ldi(1, 9)
        .mul(0, 1)
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&program);

    ctx.run_ok();

    let stats = &ctx.cpu.stats;
    assert_eq!(stats.cycles, 5);
    assert_eq!(stats.inst_load, 2);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_io, 1);
    assert_eq!(stats.inst_other, 1);
}

#[test]
fn test_undecodable_instruction_is_not_counted() {
    let program = ProgramBuilder::new().ldi(0, 1).byte(0xFF).build();
    let mut ctx = TestContext::new().load_program(&program);

    let _ = ctx.run_err();

    assert_eq!(ctx.cpu.stats.cycles, 1);
}

#[test]
fn test_instruction_that_faults_while_executing_is_not_counted() {
    let program = ProgramBuilder::new().ldi(0, 1).ldi(1, 0).div(0, 1).build();
    let mut ctx = TestContext::new().load_program(&program);

    let _ = ctx.run_err();

    assert_eq!(ctx.cpu.stats.cycles, 2);
    assert_eq!(ctx.cpu.stats.inst_alu, 0);

    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().pop(0).build());

    let _ = ctx.run_err();

    assert_eq!(ctx.cpu.stats.cycles, 0);
    assert_eq!(ctx.cpu.stats.inst_stack, 0);
}

#[test]
fn test_summary_report() {
    let mut stats = SimStats::new();
    stats.record(&Instruction::Ldi { reg: 0, imm: 1 });
    stats.record(&Instruction::Hlt);

    let report = stats.summary();

    assert!(report.contains("LS-8 EXECUTION STATISTICS"));
    assert!(report.contains("sim_cycles         2"));
    assert!(report.contains("load"));
    assert!(report.contains("( 50.0%)"));
}

#[test]
fn test_summary_with_no_cycles() {
    let report = SimStats::new().summary();
    assert!(report.contains("sim_cycles         0"));
    assert!(report.contains("(  0.0%)"));
}
