//! # Execution Loop Tests
//!
//! Whole programs run through `Cpu::run`/`Cpu::step`: the halt idiom, the
//! final PC, and retired-instruction counts.

use e20_core::common::WordAddr;
use e20_core::core::RunState;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn jump_to_self_at_zero_halts_immediately() {
    let mut ctx = TestContext::new().load_program(&[0b0100000000000000]);

    let stats = ctx.run();

    assert!(ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.pc, 0);
    assert_eq!(ctx.cpu.regs.snapshot(), [0; 8]);
    assert_eq!(stats.instructions_retired, 0);
}

#[test]
fn addi_then_halt() {
    let mut ctx = TestContext::new().load_program(&[0b0010000010000101, 0b0100000000000001]);

    let stats = ctx.run();

    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.cpu.pc, 1);
    assert!(ctx.cpu.is_halted());
    assert_eq!(stats.instructions_retired, 1);
}

#[test]
fn slt_program() {
    let mut ctx = TestContext::new().load_program(&[
        addi(1, 0, 3),
        addi(2, 0, 5),
        slt(3, 1, 2),
        slt(4, 2, 1),
        j(4),
    ]);

    let _ = ctx.run();

    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.get_reg(4), 0);
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn countdown_loop_sums_one_to_five() {
    let mut ctx = TestContext::new().load_program(&[
        addi(1, 0, 5), // 0: counter
        addi(2, 0, 0), // 1: sum
        jeq(1, 0, 3),  // 2: done? -> 6
        add(2, 2, 1),  // 3
        addi(1, 1, -1), // 4
        j(2),          // 5
        j(6),          // 6: halt
    ]);

    let stats = ctx.run();

    assert_eq!(ctx.get_reg(2), 15);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.cpu.pc, 6);
    assert_eq!(stats.instructions_retired, 23);
    assert_eq!(stats.inst_alu, 5);
    assert_eq!(stats.inst_imm, 13);
    assert_eq!(stats.inst_control, 5);
    assert_eq!(stats.branches_taken, 1);
}

#[test]
fn jal_and_jr_call_and_return() {
    let mut ctx = TestContext::new().load_program(&[
        jal(3),        // 0: call
        addi(2, 0, 9), // 1: after return
        j(2),          // 2: halt
        addi(1, 0, 7), // 3: callee
        jr(7),         // 4: return
    ]);

    let _ = ctx.run();

    assert_eq!(ctx.get_reg(1), 7);
    assert_eq!(ctx.get_reg(2), 9);
    assert_eq!(ctx.get_reg(7), 1);
    assert_eq!(ctx.cpu.pc, 2);
}

#[test]
fn store_then_load_program() {
    let mut ctx = TestContext::new().load_program(&[
        addi(2, 0, 10),
        sw(2, 0, 20),
        lw(4, 0, 20),
        j(3),
    ]);

    let stats = ctx.run();

    assert_eq!(ctx.cpu.mem.read(WordAddr::new(20)), 10);
    assert_eq!(ctx.get_reg(4), 10);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_load, 1);
}

#[test]
fn program_can_overwrite_itself() {
    // Store a halt word over address 3 before reaching it.
    let mut ctx = TestContext::new().load_program(&[
        lw(2, 0, 5),  // 0: r2 = mem[5] (j 3)
        sw(2, 0, 3),  // 1: mem[3] = j 3
        j(3),         // 2
        0xFFFF,       // 3: overwritten
        0,            // 4
        j(3),         // 5: data
    ]);

    let _ = ctx.run();

    assert_eq!(ctx.cpu.pc, 3);
    assert!(ctx.cpu.is_halted());
}

#[test]
fn step_reports_state_and_is_inert_after_halt() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 1), j(1)]);

    assert_eq!(ctx.cpu.step(), RunState::Running);
    assert_eq!(ctx.cpu.pc, 1);
    assert_eq!(ctx.cpu.step(), RunState::Halted);
    assert_eq!(ctx.cpu.step(), RunState::Halted);
    assert_eq!(ctx.cpu.pc, 1);
    assert_eq!(ctx.cpu.stats.instructions_retired, 1);
}

#[test]
fn fetch_wraps_pc_into_memory() {
    // PC 8192 fetches word 0, but the halt check compares the full PC,
    // so the jump executes once and halts on the next cycle.
    let mut ctx = TestContext::new().load_program(&[j(0)]);
    ctx.cpu.pc = 8192;

    assert_eq!(ctx.cpu.step(), RunState::Running);
    assert_eq!(ctx.cpu.pc, 0);
    assert_eq!(ctx.cpu.step(), RunState::Halted);
}

#[test]
fn jr_above_memory_size_then_halts() {
    let mut words = vec![jr(1)];
    words.resize(5, 0);
    words.push(j(5));
    let mut ctx = TestContext::new().load_program(&words);
    ctx.set_reg(1, 0x2005);

    let stats = ctx.run();

    assert_eq!(ctx.cpu.pc, 5);
    assert_eq!(stats.instructions_retired, 2);
}

#[test]
fn jal_to_self_does_not_halt() {
    let mut ctx = TestContext::new().load_program(&[jal(0)]);

    assert_eq!(ctx.cpu.step(), RunState::Running);
    assert_eq!(ctx.cpu.pc, 0);
    assert_eq!(ctx.get_reg(7), 1);
}
