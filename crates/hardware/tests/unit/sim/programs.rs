//! # Bundled Program Tests
//!
//! Runs the `.ls8` programs shipped in the workspace `programs/` directory
//! from file to halt and checks what they print.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;

#[rstest]
#[case::print8("print8.ls8", &[8])]
#[case::mult("mult.ls8", &[72])]
#[case::stack("stack.ls8", &[2, 4, 1])]
#[case::call("call.ls8", &[20, 30, 36, 60])]
#[case::sctest("sctest.ls8", &[1, 4, 5])]
fn program_output(#[case] name: &str, #[case] expected: &[u8]) {
    let mut ctx = TestContext::new().load_file(name);
    ctx.run_to_halt();
    assert_eq!(ctx.output(), expected);
}

#[test]
fn stack_program_restores_sp() {
    let mut ctx = TestContext::new().load_file("stack.ls8");
    ctx.run_to_halt();
    assert_eq!(ctx.cpu().regs.sp(), 0xF4);
    assert_eq!(ctx.cpu().stats.stack_ops, 6);
}

#[test]
fn call_program_returns_to_caller_each_time() {
    let mut ctx = TestContext::new().load_file("call.ls8");
    ctx.run_to_halt();

    // HLT sits at 23, right before the subroutine.
    assert_eq!(ctx.cpu().pc(), 23);
    assert_eq!(ctx.cpu().regs.sp(), 0xF4);
}
