//! # Control Flow Tests
//!
//! `CALL` pushes the address after itself and jumps through a register,
//! `RET` pops it back, and the jumps read their target from a register.
//! Conditional jumps test the equal bit written by the last `CMP`.

use ls8_core::common::{ExecutionError, Fault};
use ls8_core::core::StepOutcome;
use ls8_core::isa::opcodes;
use rstest::rstest;

use crate::common::builder::Program;
use crate::common::harness::TestContext;

/// Subroutine at 8 loads 42 into R0; the caller prints it after returning.
fn call_program() -> Vec<u8> {
    Program::new()
        .ldi(1, 8) // 0
        .call(1) // 3
        .prn(0) // 5
        .hlt() // 7
        .ldi(0, 42) // 8
        .ret() // 11
        .build()
}

// ─── CALL / RET ─────────────────────────────────────────────────────────────

#[test]
fn call_pushes_return_address_and_jumps() {
    let mut ctx = TestContext::new().load(&call_program());
    ctx.step_n(2);

    assert_eq!(ctx.cpu().pc(), 8);
    assert_eq!(ctx.cpu().regs.sp(), 0xF3);
    assert_eq!(ctx.cpu().memory().read(0xF3), Ok(5));
}

#[test]
fn ret_returns_after_the_call() {
    let mut ctx = TestContext::new().load(&call_program());
    ctx.step_n(4);

    assert_eq!(ctx.cpu().pc(), 5);
    assert_eq!(ctx.cpu().regs.sp(), 0xF4);
    ctx.run_to_halt();
    assert_eq!(ctx.output(), vec![42]);
}

/// `RET` leaves every general-purpose register as the subroutine left it.
#[test]
fn ret_does_not_clobber_registers() {
    let image = Program::new()
        .ldi(1, 9) // 0
        .ldi(4, 0x77) // 3
        .call(1) // 6
        .hlt() // 8
        .ret() // 9
        .build();
    let mut ctx = TestContext::new().load(&image);
    ctx.run_to_halt();

    assert_eq!(ctx.get_reg(4), 0x77);
    assert_eq!(ctx.cpu().pc(), 8);
}

#[test]
fn nested_calls_unwind_in_order() {
    let image = Program::new()
        .ldi(1, 11) // 0: outer
        .ldi(2, 19) // 3: inner
        .call(1) // 6
        .prn(0) // 8
        .hlt() // 10
        .ldi(0, 1) // 11: outer body
        .call(2) // 14
        .prn(0) // 16
        .ret() // 18
        .ldi(0, 2) // 19: inner body
        .ret() // 22
        .build();
    let mut ctx = TestContext::new().load(&image);
    ctx.run_to_halt();

    assert_eq!(ctx.output(), vec![2, 2]);
    assert_eq!(ctx.cpu().regs.sp(), 0xF4);
}

#[test]
fn call_target_register_is_read_before_push() {
    // CALL R7: the target is SP's value before the return address is pushed.
    let image = Program::new().ldi(7, 8).call(7).hlt().hlt().hlt().build();
    let mut ctx = TestContext::new().load(&image);
    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc(), 8);
}

#[test]
fn call_in_last_cells_faults() {
    let mut image = vec![0; 256];
    image[254] = opcodes::CALL;
    image[255] = 1;
    let mut ctx = TestContext::new().load(&image);
    ctx.cpu_mut().pc = 254;

    assert_eq!(
        ctx.step(),
        Err(ExecutionError::new(
            254,
            Fault::AddressOutOfBounds { addr: 256 }
        ))
    );
}

// ─── Jumps ──────────────────────────────────────────────────────────────────

#[test]
fn jmp_sets_pc_from_register() {
    let image = Program::new().ldi(0, 6).jmp(0).hlt().build();
    let mut ctx = TestContext::new().load(&image);
    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc(), 6);
    assert_eq!(ctx.step(), Ok(StepOutcome::Continue));
}

#[rstest]
#[case::jeq_equal(opcodes::JEQ, 5, 5, true)]
#[case::jeq_less(opcodes::JEQ, 4, 5, false)]
#[case::jeq_greater(opcodes::JEQ, 6, 5, false)]
#[case::jne_equal(opcodes::JNE, 5, 5, false)]
#[case::jne_less(opcodes::JNE, 4, 5, true)]
#[case::jne_greater(opcodes::JNE, 6, 5, true)]
fn conditional_jump(#[case] jump: u8, #[case] a: u8, #[case] b: u8, #[case] taken: bool) {
    let image = Program::new()
        .ldi(0, a) // 0
        .ldi(1, b) // 3
        .ldi(2, 17) // 6
        .cmp(0, 1) // 9
        .raw(&[jump, 2]) // 12
        .hlt() // 14
        .hlt() // 15
        .hlt() // 16
        .hlt() // 17
        .build();
    let mut ctx = TestContext::new().load(&image);
    ctx.step_n(5);

    let expected = if taken { 17 } else { 14 };
    assert_eq!(ctx.cpu().pc(), expected);
    assert_eq!(ctx.cpu().stats.branches_taken, u64::from(taken));
    assert_eq!(ctx.cpu().stats.branches_not_taken, u64::from(!taken));
}

/// With no `CMP` executed the flags are clear, so `JEQ` falls through and `JNE` jumps.
#[test]
fn jumps_before_any_cmp() {
    let image = Program::new().ldi(0, 7).jeq(0).jne(0).hlt().build();
    let mut ctx = TestContext::new().load(&image);

    ctx.step_n(2);
    assert_eq!(ctx.cpu().pc(), 5);
    ctx.step_n(1);
    assert_eq!(ctx.cpu().pc(), 7);
}

/// An unconditional loop: JMP back to itself never advances.
#[test]
fn jmp_to_self_spins() {
    let image = Program::new().ldi(0, 3).jmp(0).build();
    let mut ctx = TestContext::new().load(&image);
    ctx.step_n(10);
    assert_eq!(ctx.cpu().pc(), 3);
    assert!(!ctx.cpu().is_halted());
}
